//! Credential hashing through the trait object handlers receive.

use std::sync::Arc;

use membership_server::auth::{Argon2Hasher, CredentialHasher};

#[test]
fn test_signup_then_signin() {
    let hasher: Arc<dyn CredentialHasher> = Arc::new(Argon2Hasher::new());

    let stored = hasher.hash("hunter2-but-longer").unwrap();
    assert!(hasher.compare("hunter2-but-longer", &stored));
    assert!(!hasher.compare("hunter3-but-longer", &stored));
}

#[test]
fn test_foreign_digest_rejected() {
    let hasher = Argon2Hasher::new();
    // Only Argon2 digests are accepted
    let bcrypt = "$2a$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW";
    assert!(!hasher.compare("rasmuslerdorf", bcrypt));
}
