//! Common Error Types

use thiserror::Error;

/// Errors raised while decoding shared domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Value is not a known subscription tier.
    #[error("Unknown subscription tier: {0}")]
    UnknownTier(String),

    /// Value is not a known subscription status.
    #[error("Unknown subscription status: {0}")]
    UnknownStatus(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
