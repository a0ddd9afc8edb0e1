//! Alert popup payload.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Visual type of an alert popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Success,
        AlertKind::Error,
        AlertKind::Warning,
        AlertKind::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }

    /// Get emoji for the alert type.
    pub fn emoji(&self) -> &'static str {
        match self {
            AlertKind::Success => "\u{2705}",
            AlertKind::Error => "\u{1f6a8}",
            AlertKind::Warning => "\u{26a0}\u{fe0f}",
            AlertKind::Info => "\u{2139}\u{fe0f}",
        }
    }

    /// Popup accent color.
    pub fn color(&self) -> &'static str {
        match self {
            AlertKind::Success => "#28a745",
            AlertKind::Error => "#dc3545",
            AlertKind::Warning => "#ffc107",
            AlertKind::Info => "#17a2b8",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(AlertKind::Success),
            "error" => Ok(AlertKind::Error),
            "warning" => Ok(AlertKind::Warning),
            "info" => Ok(AlertKind::Info),
            other => Err(ValidationError::MalformedTrigger(format!(
                "unknown alert type '{}'",
                other
            ))),
        }
    }
}

/// A transient user-facing alert shown in the popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    /// True during the exit-animation window.
    #[serde(default)]
    pub closing: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create a new alert.
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            closing: false,
            created_at: Utc::now(),
        }
    }

    /// Build an alert from untyped trigger input.
    pub fn parse(
        kind: &str,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let alert = Self::new(kind.parse()?, title, message);
        alert.validate()?;
        Ok(alert)
    }

    /// Reject alerts that would render as an empty popup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MalformedTrigger(
                "alert title is empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, title, message)
    }
}
