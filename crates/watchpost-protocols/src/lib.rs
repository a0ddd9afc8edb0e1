//! # Watchpost Protocols
//!
//! Shared data types and capability traits for the Watchpost alert core.
//! Contains only interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`ChannelTransport`] - Delivers one message over one notification channel
//! - [`Presenter`] - Renders the alert popup and plays its sound

pub mod error;
pub mod presenter;
pub mod transport;
pub mod types;

pub use error::{PresentationError, TransportError, ValidationError};
pub use presenter::{NullPresenter, PopupPhase, PopupView, Presenter};
pub use transport::ChannelTransport;
pub use types::*;
