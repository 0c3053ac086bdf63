//! Infrastructure concerns: configuration and logging.

pub mod config;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig};
pub use telemetry::init_tracing;
