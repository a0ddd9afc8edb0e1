//! Transport errors.

use thiserror::Error;

/// Failure of a single channel send. Never aborts sibling channels.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Channel not configured: {0}")]
    NotConfigured(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Transport unavailable: {0}")]
    Unavailable(String),
}
