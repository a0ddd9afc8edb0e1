//! Channel transport capability.
//!
//! A transport performs one delivery over one channel. The dispatcher owns
//! fan-out, joining and result aggregation; transports only report success
//! with a human-readable detail, or a [`TransportError`].

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{NotifyChannel, OutboundMessage};

#[async_trait]
pub trait ChannelTransport: Send + Sync {
    /// Transport name used in logs.
    fn name(&self) -> &str;

    /// Deliver `message` over `channel`, returning a detail string on success.
    async fn send_via(
        &self,
        channel: NotifyChannel,
        message: &OutboundMessage,
    ) -> Result<String, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlertKind;

    struct EchoTransport;

    #[async_trait]
    impl ChannelTransport for EchoTransport {
        fn name(&self) -> &str {
            "echo"
        }

        async fn send_via(
            &self,
            channel: NotifyChannel,
            message: &OutboundMessage,
        ) -> Result<String, TransportError> {
            if channel == NotifyChannel::Sms {
                return Err(TransportError::NotConfigured("sms".to_string()));
            }
            Ok(format!("{}: {}", channel, message.text))
        }
    }

    #[tokio::test]
    async fn test_transport_object_safety() {
        let transport: Box<dyn ChannelTransport> = Box::new(EchoTransport);
        let message = OutboundMessage::broadcast("hello", AlertKind::Info);

        let detail = transport
            .send_via(NotifyChannel::Email, &message)
            .await
            .unwrap();
        assert_eq!(detail, "email: hello");
        assert!(transport.send_via(NotifyChannel::Sms, &message).await.is_err());
        assert_eq!(transport.name(), "echo");
    }
}
