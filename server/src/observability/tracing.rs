//! tracing-subscriber initialization.
//!
//! Installs a global `fmt` subscriber filtered by `RUST_LOG`, or by the
//! configured directive when `RUST_LOG` is unset.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// Fails instead of panicking when a subscriber is already installed, so
/// tests and embedding applications can call it unconditionally.
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("Invalid log filter: {}", config.log_level))?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::debug!(json = config.json, "Tracing initialized");
    Ok(())
}
