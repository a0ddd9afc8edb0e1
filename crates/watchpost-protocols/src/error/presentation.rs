//! Presentation errors.

use thiserror::Error;

/// Non-fatal failure of a presentation side effect such as sound playback.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Playback blocked: {0}")]
    PlaybackBlocked(String),

    #[error("Audio output unavailable")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
