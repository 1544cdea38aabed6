//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{bail, Context, Result};
use std::env;

use crate::permissions::BuiltinStrategy;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strategy used when a check does not name one (default: `premium-access`)
    pub default_access_strategy: BuiltinStrategy,

    /// Logging settings
    pub observability: ObservabilityConfig,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    /// (default: `membership_server=info`)
    pub log_level: String,

    /// Emit JSON lines instead of human-readable output (default: true)
    pub json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_access_strategy = match var("DEFAULT_ACCESS_STRATEGY") {
            Some(name) => name
                .trim()
                .parse()
                .context("DEFAULT_ACCESS_STRATEGY must name a built-in strategy")?,
            None => BuiltinStrategy::default(),
        };

        let json = match var("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("json") => true,
            Some("pretty" | "text") => false,
            Some(other) => bail!("LOG_FORMAT must be one of json, pretty, text (got {other:?})"),
        };

        Ok(Self {
            default_access_strategy,
            observability: ObservabilityConfig {
                log_level: var("LOG_FILTER").unwrap_or_else(|| "membership_server=info".into()),
                json,
            },
        })
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            default_access_strategy: BuiltinStrategy::PremiumAccess,
            observability: ObservabilityConfig {
                log_level: "membership_server=debug".into(),
                json: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serial_test::serial;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(vars(&[])).unwrap();
        assert_eq!(config.default_access_strategy, BuiltinStrategy::PremiumAccess);
        assert_eq!(config.observability.log_level, "membership_server=info");
        assert!(config.observability.json);
    }

    #[test]
    fn test_strategy_from_env() {
        let config = Config::from_vars(vars(&[("DEFAULT_ACCESS_STRATEGY", " free-access ")])).unwrap();
        assert_eq!(config.default_access_strategy, BuiltinStrategy::FreeAccess);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let err = Config::from_vars(vars(&[("DEFAULT_ACCESS_STRATEGY", "everyone")])).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_ACCESS_STRATEGY"));
    }

    #[test]
    fn test_log_format() {
        let pretty = Config::from_vars(vars(&[("LOG_FORMAT", "pretty")])).unwrap();
        assert!(!pretty.observability.json);

        let bad = Config::from_vars(vars(&[("LOG_FORMAT", "xml")]));
        assert!(bad.is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        env::set_var("DEFAULT_ACCESS_STRATEGY", "tier-based");
        env::set_var("LOG_FILTER", "membership_server=trace");
        let config = Config::from_env();
        env::remove_var("DEFAULT_ACCESS_STRATEGY");
        env::remove_var("LOG_FILTER");

        let config = config.unwrap();
        assert_eq!(config.default_access_strategy, BuiltinStrategy::TierBased);
        assert_eq!(config.observability.log_level, "membership_server=trace");
    }
}
