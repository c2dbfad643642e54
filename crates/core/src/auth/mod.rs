//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Credential shape rules for registration

mod credentials;
mod password;

pub use credentials::{
    CredentialError, MAX_USERNAME_LEN, MIN_PASSWORD_LEN, validate_password, validate_username,
};
pub use password::{PasswordError, hash_password, verify_password};
