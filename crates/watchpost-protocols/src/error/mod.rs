//! Error types for the Watchpost protocol layer.

mod presentation;
mod transport;
mod validation;

pub use presentation::*;
pub use transport::*;
pub use validation::*;
