//! Credential Hashing
//!
//! Password storage for member accounts. Sign-up, sign-in and session
//! handling live with the web layer; this module only turns secrets into
//! digests and checks them.

mod password;

pub use password::{Argon2Hasher, CredentialHasher, PasswordError};
