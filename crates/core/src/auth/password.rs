//! Password hashing with Argon2id.
//!
//! Uses the recommended Argon2id variant with secure defaults. Plain-text
//! credentials never reach storage; only PHC-format hashes do.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur during password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format.
    #[error("invalid password hash format")]
    InvalidHash,
}

/// Hashes a password using Argon2id with a fresh random salt.
///
/// Returns the hash in PHC string format.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use saku_core::auth::hash_password;
///
/// let hash = hash_password("my_secure_password").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC-format hash.
///
/// A mismatch returns `Ok(false)`, never an error; the `Err` variants are
/// reserved for malformed hashes and backend failures.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the hash format is invalid.
/// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
///
/// # Example
///
/// ```
/// use saku_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("my_password").unwrap();
/// assert!(verify_password("my_password", &hash).unwrap());
/// assert!(!verify_password("wrong_password", &hash).unwrap());
/// ```
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}
