//! Core types, window logic, and validation for the presence engine.

pub mod error;
pub mod heartbeat;
pub mod presence;

pub use error::{Error, Result};
pub use heartbeat::*;
pub use presence::*;
