//! Shared data types.

mod alert;
mod channel;
mod message;

pub use alert::*;
pub use channel::*;
pub use message::*;

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
