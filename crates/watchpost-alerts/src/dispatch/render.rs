//! Per-channel message formatting.

use watchpost_protocols::{Incident, NotifyChannel, OutboundMessage};

const BRAND: &str = "Watchpost Security Alert";

/// A message formatted for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// Only email carries a subject.
    pub subject: Option<String>,
    pub body: String,
}

/// Format `message` the way `channel` expects it.
pub fn render(channel: NotifyChannel, message: &OutboundMessage) -> RenderedMessage {
    match (&message.incident, channel) {
        (Some(incident), NotifyChannel::Email) => RenderedMessage {
            subject: Some(format!("\u{1f6a8} Security Alert: {}", incident.kind)),
            body: incident_html(incident),
        },
        (Some(incident), NotifyChannel::Whatsapp) => RenderedMessage {
            subject: None,
            body: incident_lines(
                incident,
                |label| format!("*{}:*", label),
                &format!("*{}*", BRAND),
                str::to_string,
            ),
        },
        (Some(incident), NotifyChannel::Telegram) => RenderedMessage {
            subject: None,
            body: incident_lines(
                incident,
                |label| format!("<b>{}:</b>", label),
                &format!("<b>{}</b>", BRAND),
                escape_html,
            ),
        },
        (Some(incident), NotifyChannel::Sms) => RenderedMessage {
            subject: None,
            body: format!(
                "\u{1f6a8} Watchpost Alert: {} detected on {} at {}. Severity: {}",
                incident.kind,
                incident.camera,
                incident.formatted_time(),
                incident.severity
            ),
        },
        (None, NotifyChannel::Email) => RenderedMessage {
            subject: Some(format!("{} Alert", message.kind.as_str().to_uppercase())),
            body: message.text.clone(),
        },
        (None, NotifyChannel::Whatsapp) => RenderedMessage {
            subject: None,
            body: format!(
                "*{} Alert*\n{}",
                message.kind.as_str().to_uppercase(),
                message.text
            ),
        },
        (None, NotifyChannel::Telegram) => RenderedMessage {
            subject: None,
            body: format!(
                "<b>{} Alert</b>\n{}",
                message.kind.as_str().to_uppercase(),
                escape_html(&message.text)
            ),
        },
        (None, NotifyChannel::Sms) => RenderedMessage {
            subject: None,
            body: format!("[{}] {}", message.kind.as_str().to_uppercase(), message.text),
        },
    }
}

/// Label/value lines; `escape` is applied to every incident field.
fn incident_lines(
    incident: &Incident,
    label: impl Fn(&str) -> String,
    header: &str,
    escape: impl Fn(&str) -> String,
) -> String {
    let mut lines = vec![
        format!("\u{1f6a8} {}", header),
        String::new(),
        format!("{} {}", label("Type"), escape(&incident.kind)),
        format!("{} {}", label("Camera"), escape(&incident.camera)),
    ];
    if let Some(ref location) = incident.location {
        lines.push(format!("{} {}", label("Location"), escape(location)));
    }
    lines.push(format!("{} {}", label("Time"), incident.formatted_time()));
    lines.push(format!("{} {}", label("Severity"), escape(&incident.severity)));
    lines.push(format!("{} {}", label("Description"), escape(&incident.description)));
    lines.join("\n")
}

fn incident_html(incident: &Incident) -> String {
    let location = incident
        .location
        .as_deref()
        .map(|l| format!("<p><strong>Location:</strong> {}</p>", escape_html(l)))
        .unwrap_or_default();

    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\
         <h2 style=\"color: {color};\">\u{1f6a8} {brand}</h2>\
         <div style=\"background: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;\">\
         <h3>Alert Details:</h3>\
         <p><strong>Type:</strong> {kind}</p>\
         <p><strong>Camera:</strong> {camera}</p>\
         {location}\
         <p><strong>Time:</strong> {time}</p>\
         <p><strong>Severity:</strong> {severity}</p>\
         <p><strong>Description:</strong> {description}</p>\
         </div>\
         <p style=\"color: #666;\">This is an automated alert from your Watchpost surveillance system.</p>\
         </div>",
        brand = BRAND,
        color = incident.alert_kind().color(),
        kind = escape_html(&incident.kind),
        camera = escape_html(&incident.camera),
        location = location,
        time = incident.formatted_time(),
        severity = escape_html(&incident.severity),
        description = escape_html(&incident.description),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchpost_protocols::AlertKind;

    fn fire() -> Incident {
        Incident::new(
            "Fire Detected",
            "Camera 1",
            "critical",
            "Smoke and flames detected",
        )
        .with_location("Server Room")
    }

    #[test]
    fn test_incident_email_has_subject_and_html() {
        let rendered = render(NotifyChannel::Email, &OutboundMessage::from_incident(fire()));
        assert_eq!(
            rendered.subject.as_deref(),
            Some("\u{1f6a8} Security Alert: Fire Detected")
        );
        assert!(rendered.body.contains("<strong>Camera:</strong> Camera 1"));
        assert!(rendered.body.contains("<strong>Location:</strong> Server Room"));
    }

    #[test]
    fn test_incident_whatsapp_uses_bold_markdown() {
        let rendered = render(NotifyChannel::Whatsapp, &OutboundMessage::from_incident(fire()));
        assert!(rendered.subject.is_none());
        assert!(rendered.body.contains("*Watchpost Security Alert*"));
        assert!(rendered.body.contains("*Type:* Fire Detected"));
        assert!(rendered.body.contains("*Severity:* critical"));
    }

    #[test]
    fn test_incident_telegram_uses_html_bold() {
        let rendered = render(NotifyChannel::Telegram, &OutboundMessage::from_incident(fire()));
        assert!(rendered.body.contains("<b>Camera:</b> Camera 1"));
    }

    #[test]
    fn test_incident_telegram_escapes_every_field() {
        let incident = Incident::new("Intrusion <zone A>", "Cam & 1", "high", "Door \"B\" <forced>")
            .with_location("Lot <3>");
        let rendered = render(NotifyChannel::Telegram, &OutboundMessage::from_incident(incident));

        assert!(rendered.body.contains("<b>Type:</b> Intrusion &lt;zone A&gt;"));
        assert!(rendered.body.contains("<b>Camera:</b> Cam &amp; 1"));
        assert!(rendered.body.contains("<b>Location:</b> Lot &lt;3&gt;"));
        assert!(rendered.body.contains("<b>Description:</b> Door &quot;B&quot; &lt;forced&gt;"));
        assert!(!rendered.body.contains("<zone A>"));
    }

    #[test]
    fn test_incident_whatsapp_keeps_fields_verbatim() {
        let incident = Incident::new("Intrusion <zone A>", "Cam & 1", "high", "");
        let rendered = render(NotifyChannel::Whatsapp, &OutboundMessage::from_incident(incident));
        assert!(rendered.body.contains("*Type:* Intrusion <zone A>"));
        assert!(rendered.body.contains("*Camera:* Cam & 1"));
    }

    #[test]
    fn test_incident_email_header_uses_alert_color() {
        let rendered = render(NotifyChannel::Email, &OutboundMessage::from_incident(fire()));
        assert!(rendered.body.contains(&format!("color: {};", AlertKind::Error.color())));

        let drill = Incident::new("Drill", "Camera 2", "medium", "Scheduled drill");
        let rendered = render(NotifyChannel::Email, &OutboundMessage::from_incident(drill));
        assert!(rendered.body.contains(&format!("color: {};", AlertKind::Warning.color())));
    }

    #[test]
    fn test_incident_sms_is_single_line() {
        let rendered = render(NotifyChannel::Sms, &OutboundMessage::from_incident(fire()));
        assert!(!rendered.body.contains('\n'));
        assert!(rendered.body.contains("Fire Detected detected on Camera 1"));
        assert!(rendered.body.ends_with("Severity: critical"));
    }

    #[test]
    fn test_broadcast_email_subject_from_kind() {
        let message = OutboundMessage::broadcast("Drill at 3pm", AlertKind::Warning);
        let rendered = render(NotifyChannel::Email, &message);
        assert_eq!(rendered.subject.as_deref(), Some("WARNING Alert"));
        assert_eq!(rendered.body, "Drill at 3pm");
    }

    #[test]
    fn test_broadcast_telegram_escapes_html() {
        let message = OutboundMessage::broadcast("gate <A> & <B>", AlertKind::Info);
        let rendered = render(NotifyChannel::Telegram, &message);
        assert!(rendered.body.contains("gate &lt;A&gt; &amp; &lt;B&gt;"));
    }

    #[test]
    fn test_broadcast_sms_prefix() {
        let message = OutboundMessage::broadcast("All clear", AlertKind::Success);
        assert_eq!(render(NotifyChannel::Sms, &message).body, "[SUCCESS] All clear");
    }
}
