//! Notification channels and per-channel dispatch results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One notification transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyChannel {
    Email,
    Whatsapp,
    Telegram,
    Sms,
}

impl NotifyChannel {
    pub const ALL: [NotifyChannel; 4] = [
        NotifyChannel::Email,
        NotifyChannel::Whatsapp,
        NotifyChannel::Telegram,
        NotifyChannel::Sms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotifyChannel::Email => "email",
            NotifyChannel::Whatsapp => "whatsapp",
            NotifyChannel::Telegram => "telegram",
            NotifyChannel::Sms => "sms",
        }
    }

    /// Human-readable product name.
    pub fn label(&self) -> &'static str {
        match self {
            NotifyChannel::Email => "Email",
            NotifyChannel::Whatsapp => "WhatsApp",
            NotifyChannel::Telegram => "Telegram",
            NotifyChannel::Sms => "SMS",
        }
    }
}

impl fmt::Display for NotifyChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifyChannel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(NotifyChannel::Email),
            "whatsapp" => Ok(NotifyChannel::Whatsapp),
            "telegram" => Ok(NotifyChannel::Telegram),
            "sms" => Ok(NotifyChannel::Sms),
            other => Err(ValidationError::MalformedTrigger(format!(
                "unknown channel '{}'",
                other
            ))),
        }
    }
}

/// Outcome of one channel within a dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelResult {
    pub channel: NotifyChannel,
    pub success: bool,
    pub detail: String,
}

impl ChannelResult {
    pub fn succeeded(channel: NotifyChannel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            success: true,
            detail: detail.into(),
        }
    }

    pub fn failed(channel: NotifyChannel, detail: impl Into<String>) -> Self {
        Self {
            channel,
            success: false,
            detail: detail.into(),
        }
    }
}
