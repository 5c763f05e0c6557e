//! Tracing setup: JSON structured logging, span definitions and event helpers.

pub mod events;
pub mod spans;

use marketfuse_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "MARKETFUSE_LOG";

/// Install the global JSON subscriber.
///
/// Respects `MARKETFUSE_LOG`; defaults to `info`. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install the global subscriber with an explicit filter (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

/// Install tracing per `config`. `MARKETFUSE_LOG` still wins over
/// `log_level` when set. Does nothing unless `tracing_enabled`.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    if !config.tracing_enabled {
        return false;
    }
    match std::env::var(LOG_ENV) {
        Ok(_) => init_tracing(),
        Err(_) => init_tracing_with_filter(&config.log_level),
    }
}
