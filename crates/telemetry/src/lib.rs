//! Internal telemetry for the presence engine.
//!
//! In-process counters and health flags only; there is no external
//! metrics system to ship to.

pub mod health;
pub mod metrics;
pub mod tracing_setup;

pub use health::*;
pub use metrics::*;
pub use tracing_setup::*;
