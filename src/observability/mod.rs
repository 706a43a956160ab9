//! Observability module
//!
//! Logging setup for conversion runs.

pub mod logging;

pub use logging::{LogFormat, init_logging};
