//! Application-wide error types.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The string payload is the full client-facing message; producers
/// phrase it as a complete sentence.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("{0}")]
    Validation(String),

    /// Authentication failed.
    #[error("{0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    /// Conflict (e.g., duplicate entry).
    #[error("{0}")]
    Conflict(String),

    /// Storage backend unreachable.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::NotFound(_) | Self::UserNotFound(_) => 404,
            Self::Conflict(_) => 409,
            Self::StoreUnavailable(_) => 503,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
