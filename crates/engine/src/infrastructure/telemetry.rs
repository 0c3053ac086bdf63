//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::EngineConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Returns `false` when a
/// global subscriber was already installed (e.g. by the hosting application),
/// in which case the existing one is left alone.
pub fn init_tracing(config: &EngineConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
