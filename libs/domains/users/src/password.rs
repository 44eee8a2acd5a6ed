//! Argon2id password digests in PHC string format.
//!
//! The digest embeds algorithm, version, cost parameters and a fresh random
//! salt, so hashing the same password twice yields different strings and
//! verification needs nothing but the digest.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::error::{UserError, UserResult};

/// Hashes `plain` with a new random salt.
pub fn hash_password(plain: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::HashingUnavailable(e.to_string()))
}

/// Checks `plain` against a digest produced by [`hash_password`].
///
/// A wrong password is `Ok(false)`; a digest that cannot be parsed is an
/// error.
pub fn verify_password(plain: &str, digest: &str) -> UserResult<bool> {
    let parsed =
        PasswordHash::new(digest).map_err(|e| UserError::HashingUnavailable(e.to_string()))?;

    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(UserError::HashingUnavailable(e.to_string())),
    }
}
