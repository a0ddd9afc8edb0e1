//! Alert popup lifecycle.
//!
//! [`AlertPopupController`] is a synchronous state machine driven by explicit
//! inputs. [`PopupDriver`] wires it to tokio timers.

mod controller;
mod driver;

pub use controller::AlertPopupController;
pub use driver::PopupDriver;
