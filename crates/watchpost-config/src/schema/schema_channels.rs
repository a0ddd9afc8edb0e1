//! Notification channel and dispatch configuration types.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Dispatch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Simulated network latency per channel.
    #[serde(default)]
    pub latency: LatencyConfig,
}

/// Inclusive latency range in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Simulated latency per channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_email_latency")]
    pub email: LatencyRange,

    #[serde(default = "default_whatsapp_latency")]
    pub whatsapp: LatencyRange,

    #[serde(default = "default_telegram_latency")]
    pub telegram: LatencyRange,

    #[serde(default = "default_sms_latency")]
    pub sms: LatencyRange,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            email: default_email_latency(),
            whatsapp: default_whatsapp_latency(),
            telegram: default_telegram_latency(),
            sms: default_sms_latency(),
        }
    }
}

fn default_email_latency() -> LatencyRange {
    LatencyRange::new(1000, 3000)
}

fn default_whatsapp_latency() -> LatencyRange {
    LatencyRange::new(800, 2300)
}

fn default_telegram_latency() -> LatencyRange {
    LatencyRange::new(600, 1800)
}

fn default_sms_latency() -> LatencyRange {
    LatencyRange::new(700, 2500)
}

/// Per-channel delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub email: EmailChannelConfig,

    #[serde(default)]
    pub whatsapp: WhatsappChannelConfig,

    #[serde(default)]
    pub telegram: TelegramChannelConfig,

    #[serde(default)]
    pub sms: SmsChannelConfig,
}

/// Email channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailChannelConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub smtp: SmtpConfig,

    #[serde(default)]
    pub recipients: Vec<String>,
}

impl Default for EmailChannelConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            smtp: SmtpConfig::default(),
            recipients: Vec::new(),
        }
    }
}

/// SMTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,

    #[serde(default = "default_smtp_port")]
    pub port: u16,

    #[serde(default)]
    pub secure: bool,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub pass: String,

    #[serde(default = "default_smtp_from")]
    pub from: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            secure: false,
            user: String::new(),
            pass: String::new(),
            from: default_smtp_from(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_from() -> String {
    "alerts@watchpost.local".to_string()
}

/// WhatsApp Business API channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhatsappChannelConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub business_number: String,

    #[serde(default)]
    pub recipients: Vec<String>,
}

/// Telegram Bot API channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramChannelConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub bot_token: String,

    #[serde(default)]
    pub chat_ids: Vec<String>,
}

/// SMS gateway channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsChannelConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Gateway provider, e.g. `twilio` or `aws-sns`.
    #[serde(default = "default_sms_provider")]
    pub provider: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub api_secret: String,

    #[serde(default)]
    pub from_number: String,

    #[serde(default)]
    pub recipients: Vec<String>,
}

impl Default for SmsChannelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: default_sms_provider(),
            api_key: String::new(),
            api_secret: String::new(),
            from_number: String::new(),
            recipients: Vec::new(),
        }
    }
}

fn default_sms_provider() -> String {
    "twilio".to_string()
}
