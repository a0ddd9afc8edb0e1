//! Tests for shared types.

use super::*;
use crate::error::ValidationError;

#[test]
fn test_alert_kind_parse() {
    assert_eq!("error".parse::<AlertKind>().unwrap(), AlertKind::Error);
    assert_eq!(" Warning ".parse::<AlertKind>().unwrap(), AlertKind::Warning);
    assert!(matches!(
        "fatal".parse::<AlertKind>(),
        Err(ValidationError::MalformedTrigger(_))
    ));
}

#[test]
fn test_alert_kind_display_roundtrips_through_parse() {
    for kind in AlertKind::ALL {
        assert_eq!(kind.to_string().parse::<AlertKind>().unwrap(), kind);
    }
}

#[test]
fn test_alert_new_is_not_closing() {
    let alert = Alert::error("Fire Detected", "Smoke in server room");
    assert_eq!(alert.kind, AlertKind::Error);
    assert!(!alert.closing);
}

#[test]
fn test_alert_parse_rejects_blank_title() {
    let result = Alert::parse("info", "   ", "body");
    assert!(matches!(result, Err(ValidationError::MalformedTrigger(_))));
}

#[test]
fn test_alert_serializes_type_field() {
    let alert = Alert::warning("Motion", "Camera 3");
    let json = serde_json::to_value(&alert).unwrap();
    assert_eq!(json["type"], "warning");
    assert_eq!(json["closing"], false);
}

#[test]
fn test_alert_deserializes_from_bare_trigger() {
    let json = r#"{"type":"error","title":"Fire Detected","message":"Smoke in server room"}"#;
    let alert: Alert = serde_json::from_str(json).unwrap();
    assert_eq!(alert.kind, AlertKind::Error);
    assert_eq!(alert.title, "Fire Detected");
    assert!(!alert.closing);
    assert!(alert.validate().is_ok());
}

#[test]
fn test_channel_parse_and_label() {
    assert_eq!("WhatsApp".parse::<NotifyChannel>().unwrap(), NotifyChannel::Whatsapp);
    assert_eq!(NotifyChannel::Sms.label(), "SMS");
    assert!("pager".parse::<NotifyChannel>().is_err());
}

#[test]
fn test_channel_ordering_follows_declaration() {
    let mut channels = vec![NotifyChannel::Sms, NotifyChannel::Email, NotifyChannel::Telegram];
    channels.sort();
    assert_eq!(
        channels,
        vec![NotifyChannel::Email, NotifyChannel::Telegram, NotifyChannel::Sms]
    );
}

#[test]
fn test_channel_result_constructors() {
    let ok = ChannelResult::succeeded(NotifyChannel::Email, "sent");
    let err = ChannelResult::failed(NotifyChannel::Sms, "gateway down");
    assert!(ok.success);
    assert!(!err.success);
    assert_eq!(err.detail, "gateway down");
}

#[test]
fn test_incident_alert_kind_mapping() {
    assert_eq!(Incident::new("Fire Detected", "Camera 1", "critical", "").alert_kind(), AlertKind::Error);
    assert_eq!(Incident::new("Loitering", "Camera 2", "warning", "").alert_kind(), AlertKind::Warning);
    assert_eq!(Incident::system_test().alert_kind(), AlertKind::Info);
}

#[test]
fn test_outbound_from_incident_uses_description() {
    let incident = Incident::new("Intrusion", "Camera 4", "High", "Person at gate")
        .with_location("North Gate");
    let message = OutboundMessage::from_incident(incident);
    assert_eq!(message.text, "Person at gate");
    assert_eq!(message.kind, AlertKind::Error);
    assert_eq!(
        message.incident.unwrap().location.as_deref(),
        Some("North Gate")
    );
}
