//! Simulated channel transport.
//!
//! Stands in for SMTP, the WhatsApp Business API, the Telegram Bot API and an
//! SMS gateway: waits a random channel-specific latency, logs the formatted
//! message and reports success.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use watchpost_config::{LatencyConfig, LatencyRange};
use watchpost_protocols::{ChannelTransport, NotifyChannel, OutboundMessage, TransportError};

use super::render::render;

/// Transport that never leaves the process.
pub struct SimulatedTransport {
    latency: LatencyConfig,
}

impl SimulatedTransport {
    pub fn new(latency: LatencyConfig) -> Self {
        Self { latency }
    }

    /// Latency range configured for `channel`.
    pub fn latency_range(&self, channel: NotifyChannel) -> LatencyRange {
        match channel {
            NotifyChannel::Email => self.latency.email,
            NotifyChannel::Whatsapp => self.latency.whatsapp,
            NotifyChannel::Telegram => self.latency.telegram,
            NotifyChannel::Sms => self.latency.sms,
        }
    }

    fn pick_delay(&self, channel: NotifyChannel) -> Duration {
        let range = self.latency_range(channel);
        let millis = if range.max_ms <= range.min_ms {
            range.min_ms
        } else {
            rand::thread_rng().gen_range(range.min_ms..=range.max_ms)
        };
        Duration::from_millis(millis)
    }

    fn detail(channel: NotifyChannel) -> &'static str {
        match channel {
            NotifyChannel::Email => "Email sent successfully (simulated)",
            NotifyChannel::Whatsapp => "WhatsApp message delivered",
            NotifyChannel::Telegram => "Telegram message sent",
            NotifyChannel::Sms => "SMS delivered",
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(LatencyConfig::default())
    }
}

#[async_trait]
impl ChannelTransport for SimulatedTransport {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn send_via(
        &self,
        channel: NotifyChannel,
        message: &OutboundMessage,
    ) -> Result<String, TransportError> {
        let delay = self.pick_delay(channel);
        tokio::time::sleep(delay).await;

        let rendered = render(channel, message);
        info!(
            channel = %channel,
            latency_ms = (delay.as_millis() as u64),
            subject = rendered.subject.as_deref().unwrap_or(""),
            "Simulated {} send:\n{}",
            channel.label(),
            rendered.body
        );

        Ok(Self::detail(channel).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;
    use watchpost_protocols::AlertKind;

    #[tokio::test(start_paused = true)]
    async fn test_send_waits_within_configured_range() {
        let transport = SimulatedTransport::default();
        let message = OutboundMessage::broadcast("Drill", AlertKind::Info);

        let start = Instant::now();
        let detail = transport
            .send_via(NotifyChannel::Telegram, &message)
            .await
            .unwrap();
        let elapsed = start.elapsed();

        assert_eq!(detail, "Telegram message sent");
        assert!(elapsed >= Duration::from_millis(600));
        assert!(elapsed <= Duration::from_millis(1800));
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_channel_reports_its_detail() {
        let transport = SimulatedTransport::default();
        let message = OutboundMessage::broadcast("Drill", AlertKind::Info);

        for channel in NotifyChannel::ALL {
            let detail = transport.send_via(channel, &message).await.unwrap();
            assert_eq!(detail, SimulatedTransport::detail(channel));
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let mut latency = LatencyConfig::default();
        latency.sms = LatencyRange::new(250, 100);
        let transport = SimulatedTransport::new(latency);
        assert_eq!(
            transport.pick_delay(NotifyChannel::Sms),
            Duration::from_millis(250)
        );
    }
}
