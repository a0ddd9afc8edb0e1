//! Channel configuration status.

use serde::Serialize;

use watchpost_config::ChannelsConfig;
use watchpost_protocols::NotifyChannel;

/// Whether a channel is switched on and has somewhere to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChannelStatus {
    pub enabled: bool,
    /// Recipients present and, for API channels, credentials set.
    pub configured: bool,
    pub recipient_count: usize,
}

impl ChannelStatus {
    pub fn for_channel(config: &ChannelsConfig, channel: NotifyChannel) -> Self {
        match channel {
            NotifyChannel::Email => Self {
                enabled: config.email.enabled,
                configured: !config.email.recipients.is_empty(),
                recipient_count: config.email.recipients.len(),
            },
            NotifyChannel::Whatsapp => Self {
                enabled: config.whatsapp.enabled,
                configured: !config.whatsapp.api_key.is_empty()
                    && !config.whatsapp.recipients.is_empty(),
                recipient_count: config.whatsapp.recipients.len(),
            },
            NotifyChannel::Telegram => Self {
                enabled: config.telegram.enabled,
                configured: !config.telegram.bot_token.is_empty()
                    && !config.telegram.chat_ids.is_empty(),
                recipient_count: config.telegram.chat_ids.len(),
            },
            NotifyChannel::Sms => Self {
                enabled: config.sms.enabled,
                configured: !config.sms.api_key.is_empty() && !config.sms.recipients.is_empty(),
                recipient_count: config.sms.recipients.len(),
            },
        }
    }

    /// Incident broadcasts go to enabled channels with at least one recipient.
    pub fn is_dispatchable(&self) -> bool {
        self.enabled && self.recipient_count > 0
    }
}
