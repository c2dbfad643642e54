//! Credential shape rules for registration.

use thiserror::Error;

/// Maximum accepted username length in characters.
pub const MAX_USERNAME_LEN: usize = 50;

/// Minimum accepted password length in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Errors for malformed registration credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Username is empty or whitespace-only.
    #[error("Username must not be blank")]
    BlankUsername,

    /// Username exceeds the maximum length.
    #[error("Username must be at most {MAX_USERNAME_LEN} characters")]
    UsernameTooLong,

    /// Password is shorter than the minimum length.
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

/// Validates a username, returning the trimmed form.
///
/// # Errors
///
/// Returns `CredentialError::BlankUsername` if the username is empty after
/// trimming, or `CredentialError::UsernameTooLong` if it exceeds
/// [`MAX_USERNAME_LEN`] characters.
pub fn validate_username(username: &str) -> Result<&str, CredentialError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(CredentialError::BlankUsername);
    }
    if trimmed.chars().count() > MAX_USERNAME_LEN {
        return Err(CredentialError::UsernameTooLong);
    }
    Ok(trimmed)
}

/// Validates a password against the minimum-length rule.
///
/// # Errors
///
/// Returns `CredentialError::PasswordTooShort` if the password has fewer than
/// [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("alice")]
    #[case("  bob  ")]
    #[case("user_with-symbols.99")]
    fn test_valid_usernames_accepted(#[case] username: &str) {
        let result = validate_username(username);
        assert_eq!(result, Ok(username.trim()));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_usernames_rejected(#[case] username: &str) {
        assert_eq!(
            validate_username(username),
            Err(CredentialError::BlankUsername)
        );
    }

    #[test]
    fn test_overlong_username_rejected() {
        let long = "a".repeat(MAX_USERNAME_LEN + 1);
        assert_eq!(
            validate_username(&long),
            Err(CredentialError::UsernameTooLong)
        );
    }

    #[test]
    fn test_username_at_limit_accepted() {
        let at_limit = "a".repeat(MAX_USERNAME_LEN);
        assert!(validate_username(&at_limit).is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        assert_eq!(
            validate_password("1234567"),
            Err(CredentialError::PasswordTooShort)
        );
    }

    #[test]
    fn test_password_at_minimum_accepted() {
        assert!(validate_password("12345678").is_ok());
    }
}
