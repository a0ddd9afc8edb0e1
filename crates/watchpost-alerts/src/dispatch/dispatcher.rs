//! Notification dispatcher.
//!
//! One dispatch spawns a task per selected channel and joins all of them.
//! A failing or panicking channel becomes a failed [`ChannelResult`]; it never
//! aborts its siblings or the dispatch itself.

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use futures::future::join_all;
use parking_lot::RwLock;
use tracing::{error, info, warn};
use uuid::Uuid;

use watchpost_config::{ChannelsConfig, Config};
use watchpost_protocols::{
    AlertKind, ChannelResult, ChannelTransport, Incident, NotifyChannel, OutboundMessage,
    ValidationError,
};

use super::report::DispatchReport;
use super::simulated::SimulatedTransport;
use super::status::ChannelStatus;

/// Fans one message out to several notification channels.
pub struct NotificationDispatcher {
    transport: Arc<dyn ChannelTransport>,
    channels: RwLock<ChannelsConfig>,
}

impl NotificationDispatcher {
    /// Create a dispatcher over `transport`.
    pub fn new(transport: Arc<dyn ChannelTransport>, channels: ChannelsConfig) -> Self {
        Self {
            transport,
            channels: RwLock::new(channels),
        }
    }

    /// Create a dispatcher backed by [`SimulatedTransport`].
    pub fn simulated(config: &Config) -> Self {
        Self::new(
            Arc::new(SimulatedTransport::new(config.dispatch.latency.clone())),
            config.channels.clone(),
        )
    }

    /// Broadcast `message` to exactly the `channels` selected by the caller.
    pub async fn send(
        &self,
        message: &str,
        kind: AlertKind,
        channels: &BTreeSet<NotifyChannel>,
    ) -> Result<DispatchReport, ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        if channels.is_empty() {
            return Err(ValidationError::NoChannelSelected);
        }

        let outbound = OutboundMessage::broadcast(message, kind);
        Ok(self.fan_out(outbound, channels).await)
    }

    /// Broadcast an incident to every enabled channel that has recipients.
    pub async fn send_incident(&self, incident: Incident) -> DispatchReport {
        let channels = self.dispatchable_channels();
        if channels.is_empty() {
            warn!(kind = %incident.kind, "No notification channel is enabled and configured");
        }
        self.fan_out(OutboundMessage::from_incident(incident), &channels)
            .await
    }

    /// Send the fixed system-test incident through the dispatchable channels.
    pub async fn test_channels(&self) -> DispatchReport {
        self.send_incident(Incident::system_test()).await
    }

    /// Status of every channel.
    pub fn channel_status(&self) -> BTreeMap<NotifyChannel, ChannelStatus> {
        let channels = self.channels.read();
        NotifyChannel::ALL
            .into_iter()
            .map(|c| (c, ChannelStatus::for_channel(&channels, c)))
            .collect()
    }

    /// Channels an incident broadcast would contact.
    pub fn dispatchable_channels(&self) -> BTreeSet<NotifyChannel> {
        self.channel_status()
            .into_iter()
            .filter(|(_, status)| status.is_dispatchable())
            .map(|(channel, _)| channel)
            .collect()
    }

    /// Modify channel configuration in place.
    pub fn update_channels<F>(&self, update: F)
    where
        F: FnOnce(&mut ChannelsConfig),
    {
        let mut channels = self.channels.write();
        update(&mut *channels);
        info!("Notification channel configuration updated");
    }

    /// Snapshot of the channel configuration.
    pub fn channels(&self) -> ChannelsConfig {
        self.channels.read().clone()
    }

    async fn fan_out(
        &self,
        message: OutboundMessage,
        channels: &BTreeSet<NotifyChannel>,
    ) -> DispatchReport {
        let dispatch_id = Uuid::new_v4();
        info!(
            %dispatch_id,
            transport = self.transport.name(),
            channels = ?channels,
            kind = %message.kind,
            "Dispatching notification"
        );

        let text = message.text.clone();
        let message = Arc::new(message);
        let sends = channels.iter().map(|&channel| {
            let transport = Arc::clone(&self.transport);
            let message = Arc::clone(&message);
            let handle =
                tokio::spawn(async move { transport.send_via(channel, &message).await });
            async move { (channel, handle.await) }
        });

        let results = join_all(sends)
            .await
            .into_iter()
            .map(|(channel, outcome)| match outcome {
                Ok(Ok(detail)) => ChannelResult::succeeded(channel, detail),
                Ok(Err(e)) => {
                    warn!(%dispatch_id, %channel, "Channel send failed: {}", e);
                    ChannelResult::failed(channel, e.to_string())
                }
                Err(e) => {
                    error!(%dispatch_id, %channel, "Channel send task aborted: {}", e);
                    ChannelResult::failed(channel, format!("send task aborted: {}", e))
                }
            })
            .collect::<Vec<_>>();

        let report = DispatchReport::new(dispatch_id, text, results);
        info!(
            %dispatch_id,
            succeeded = report.succeeded().len(),
            failed = report.failed().len(),
            "Dispatch complete"
        );
        report
    }
}
