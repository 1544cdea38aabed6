//! Observability: structured logging.
//!
//! # Quick start
//!
//! ```rust,no_run
//! # use membership_server::{config::Config, observability};
//! let config = Config::from_env()?;
//! // In main(), before any logging:
//! observability::init(&config.observability)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod tracing;

pub use self::tracing::init;
