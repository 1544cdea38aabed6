//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing the secret failed.
    #[error("Password processing failed: {0}")]
    Hash(String),
}

/// Opaque hash/compare capability for member credentials.
pub trait CredentialHasher: Send + Sync {
    /// Hash a plain text secret into a self-describing digest.
    fn hash(&self, secret: &str) -> Result<String, PasswordError>;

    /// Check a plain text secret against a digest produced by [`Self::hash`].
    ///
    /// A digest that cannot be parsed never matches.
    fn compare(&self, secret: &str, digest: &str) -> bool;
}

/// Argon2id hasher with a random salt per digest (PHC string format).
///
/// Uses the crate's default (recommended) Argon2id parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!("Failed to hash password: {}", e);
                PasswordError::Hash(e.to_string())
            })
    }

    fn compare(&self, secret: &str, digest: &str) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Rejecting malformed password digest: {}", e);
                return false;
            }
        };

        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}
