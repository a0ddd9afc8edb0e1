//! # Watchpost Alerts
//!
//! The interactive core of the Watchpost surveillance dashboard.
//!
//! ## Features
//!
//! - Alert popup lifecycle: countdown, hover pause, click-to-close and the
//!   closing animation window ([`AlertPopupController`], [`PopupDriver`])
//! - Broadcast of one message to email, WhatsApp, Telegram and SMS in
//!   parallel ([`NotificationDispatcher`])

pub mod dispatch;
pub mod popup;

pub use dispatch::{
    render, ChannelStatus, DispatchReport, NotificationDispatcher, RenderedMessage,
    SimulatedTransport,
};
pub use popup::{AlertPopupController, PopupDriver};
