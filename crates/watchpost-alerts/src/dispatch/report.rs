//! Aggregated dispatch outcome.

use serde::Serialize;
use uuid::Uuid;

use watchpost_protocols::{Alert, ChannelResult, NotifyChannel};

/// Results of one dispatch, one entry per contacted channel.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub dispatch_id: Uuid,
    /// Message text as submitted.
    pub message: String,
    pub results: Vec<ChannelResult>,
}

impl DispatchReport {
    pub fn new(dispatch_id: Uuid, message: impl Into<String>, results: Vec<ChannelResult>) -> Self {
        Self {
            dispatch_id,
            message: message.into(),
            results,
        }
    }

    pub fn succeeded(&self) -> Vec<NotifyChannel> {
        self.results
            .iter()
            .filter(|r| r.success)
            .map(|r| r.channel)
            .collect()
    }

    pub fn failed(&self) -> Vec<NotifyChannel> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.channel)
            .collect()
    }

    pub fn result(&self, channel: NotifyChannel) -> Option<&ChannelResult> {
        self.results.iter().find(|r| r.channel == channel)
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Popups reporting this outcome to the operator.
    pub fn summary_alerts(&self) -> Vec<Alert> {
        let mut alerts = Vec::new();

        let succeeded = self.succeeded();
        if !succeeded.is_empty() {
            alerts.push(Alert::success(
                "Notifications Sent Successfully",
                format!(
                    "Message delivered via: {}\n\"{}\"",
                    upper_list(&succeeded),
                    self.message
                ),
            ));
        }

        let failed = self.failed();
        if !failed.is_empty() {
            alerts.push(Alert::warning(
                "Some Notifications Failed",
                format!("Failed to send via: {}", upper_list(&failed)),
            ));
        }

        alerts
    }
}

fn upper_list(channels: &[NotifyChannel]) -> String {
    channels
        .iter()
        .map(|c| c.as_str().to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchpost_protocols::AlertKind;

    fn report(results: Vec<ChannelResult>) -> DispatchReport {
        DispatchReport::new(Uuid::new_v4(), "Evacuate building B", results)
    }

    #[test]
    fn test_partition() {
        let report = report(vec![
            ChannelResult::succeeded(NotifyChannel::Email, "sent"),
            ChannelResult::failed(NotifyChannel::Sms, "gateway down"),
            ChannelResult::succeeded(NotifyChannel::Telegram, "sent"),
        ]);

        assert_eq!(report.succeeded(), vec![NotifyChannel::Email, NotifyChannel::Telegram]);
        assert_eq!(report.failed(), vec![NotifyChannel::Sms]);
        assert!(!report.all_succeeded());
        assert_eq!(report.result(NotifyChannel::Sms).unwrap().detail, "gateway down");
        assert!(report.result(NotifyChannel::Whatsapp).is_none());
    }

    #[test]
    fn test_summary_for_full_success() {
        let report = report(vec![
            ChannelResult::succeeded(NotifyChannel::Whatsapp, "delivered"),
            ChannelResult::succeeded(NotifyChannel::Sms, "delivered"),
        ]);

        let alerts = report.summary_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Success);
        assert_eq!(alerts[0].title, "Notifications Sent Successfully");
        assert_eq!(
            alerts[0].message,
            "Message delivered via: WHATSAPP, SMS\n\"Evacuate building B\""
        );
    }

    #[test]
    fn test_summary_with_failures() {
        let report = report(vec![
            ChannelResult::succeeded(NotifyChannel::Email, "sent"),
            ChannelResult::failed(NotifyChannel::Telegram, "bot blocked"),
        ]);

        let alerts = report.summary_alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[1].kind, AlertKind::Warning);
        assert_eq!(alerts[1].message, "Failed to send via: TELEGRAM");
    }

    #[test]
    fn test_empty_report_has_no_summary() {
        let report = report(Vec::new());
        assert!(report.is_empty());
        assert!(report.all_succeeded());
        assert!(report.summary_alerts().is_empty());
    }
}
