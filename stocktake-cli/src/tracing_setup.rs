//! Tracing setup for the stocktake CLI
//!
//! Usage:
//!   stocktake --debug serve              # Debug logging to console
//!   stocktake --json-logs serve          # One JSON object per log line
//!   RUST_LOG=stocktake_server=debug ...  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                             # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets the debug level if RUST_LOG is not set)
    pub debug: bool,
    /// Emit JSON log lines instead of the compact format
    pub json: bool,
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug); // Show targets in debug mode

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    result.map_err(|err| anyhow!(err))
}
