//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events. The binary installs one
//! subscriber writing to stderr, so stdout carries nothing but the
//! rendered task views.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this twice
/// returns an error rather than replacing the first subscriber.
pub fn init(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| anyhow!("invalid log level '{}': {}", level, e))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}
