//! Multi-channel notification dispatch.

mod dispatcher;
mod render;
mod report;
mod simulated;
mod status;

pub use dispatcher::NotificationDispatcher;
pub use render::{render, RenderedMessage};
pub use report::DispatchReport;
pub use simulated::SimulatedTransport;
pub use status::ChannelStatus;
