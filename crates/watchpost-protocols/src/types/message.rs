//! Messages handed to channel transports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::AlertKind;

/// A detected security event broadcast to every enabled channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Detection type, e.g. "Fire Detected".
    pub kind: String,
    pub camera: String,
    pub timestamp: DateTime<Utc>,
    /// Free-form severity label ("critical", "High", ...).
    pub severity: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Incident {
    pub fn new(
        kind: impl Into<String>,
        camera: impl Into<String>,
        severity: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            camera: camera.into(),
            timestamp: Utc::now(),
            severity: severity.into(),
            description: description.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Fixed incident used to verify that channels are reachable.
    pub fn system_test() -> Self {
        Self::new(
            "System Test",
            "Test Camera",
            "Low",
            "This is a test notification to verify your alert channels are working correctly.",
        )
    }

    /// Map the free-form severity label onto a popup type.
    pub fn alert_kind(&self) -> AlertKind {
        match self.severity.to_ascii_lowercase().as_str() {
            "critical" | "error" | "high" => AlertKind::Error,
            "warning" | "medium" => AlertKind::Warning,
            _ => AlertKind::Info,
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// What a transport receives for one channel send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub text: String,
    pub kind: AlertKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incident: Option<Incident>,
}

impl OutboundMessage {
    /// Free-text broadcast typed by an operator.
    pub fn broadcast(text: impl Into<String>, kind: AlertKind) -> Self {
        Self {
            text: text.into(),
            kind,
            incident: None,
        }
    }

    pub fn from_incident(incident: Incident) -> Self {
        Self {
            text: incident.description.clone(),
            kind: incident.alert_kind(),
            incident: Some(incident),
        }
    }
}
