//! Validation errors.

use thiserror::Error;

use crate::types::{Alert, AlertKind};

/// Rejected caller input. Raised before any side effect takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Message is empty")]
    EmptyMessage,

    #[error("No notification channel selected")]
    NoChannelSelected,

    #[error("Malformed trigger: {0}")]
    MalformedTrigger(String),
}

impl ValidationError {
    /// The popup the dashboard shows when a broadcast form is rejected.
    pub fn to_alert(&self) -> Alert {
        match self {
            ValidationError::EmptyMessage => Alert::new(
                AlertKind::Error,
                "Message Required",
                "Please enter a message before sending.",
            ),
            ValidationError::NoChannelSelected => Alert::new(
                AlertKind::Warning,
                "No Channels Selected",
                "Please select at least one communication channel.",
            ),
            ValidationError::MalformedTrigger(reason) => {
                Alert::new(AlertKind::Error, "Invalid Alert", reason.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_display() {
        let err = ValidationError::EmptyMessage;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_malformed_trigger_display() {
        let err = ValidationError::MalformedTrigger("unknown alert type 'fatal'".to_string());
        let display = err.to_string();
        assert!(display.contains("Malformed"));
        assert!(display.contains("fatal"));
    }

    #[test]
    fn test_empty_message_alert() {
        let alert = ValidationError::EmptyMessage.to_alert();
        assert_eq!(alert.kind, AlertKind::Error);
        assert_eq!(alert.title, "Message Required");
    }

    #[test]
    fn test_no_channel_alert_is_warning() {
        let alert = ValidationError::NoChannelSelected.to_alert();
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.title, "No Channels Selected");
    }
}
