//! Registration and login routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use saku_core::auth::{hash_password, validate_password, validate_username, verify_password};
use saku_db::{UserError, UserRepository};
use saku_shared::AppError;

use crate::AppState;
use crate::routes::error_response;

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Request body for registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Username; trimmed before any checks.
    pub username: String,
    /// Plain-text password; hashed before it reaches storage.
    pub password: String,
}

/// POST /register - Create a new user account.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> impl IntoResponse {
    let username = match validate_username(&payload.username) {
        Ok(name) => name,
        Err(e) => return error_response(AppError::Validation(e.to_string())),
    };
    if let Err(e) = validate_password(&payload.password) {
        return error_response(AppError::Validation(e.to_string()));
    }

    let password_hash = match hash_password(&payload.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!(error = %e, "Failed to hash password");
            return error_response(AppError::Internal("password hashing failed".to_string()));
        }
    };

    let users = UserRepository::new(state.db.clone());
    let user = match users.create(username, &password_hash).await {
        Ok(user) => user,
        Err(e @ UserError::UsernameTaken(_)) => {
            info!(username = %username, "Registration with taken username");
            return error_response(e.into());
        }
        Err(e) => {
            error!(error = %e, "Failed to create user");
            return error_response(e.into());
        }
    };

    info!(user_id = %user.id, "New user registered");

    (
        StatusCode::CREATED,
        Json(json!({
            "user_id": user.id,
            "username": user.username,
        })),
    )
        .into_response()
}

/// POST /login - Verify credentials.
///
/// Unknown usernames and wrong passwords produce the same response, so
/// the endpoint does not leak which usernames exist.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> impl IntoResponse {
    let users = UserRepository::new(state.db.clone());

    let user = match users.find_by_username(payload.username.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!(username = %payload.username, "Login attempt for unknown user");
            return error_response(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }
        Err(e) => {
            error!(error = %e, "Database error during login");
            return error_response(e.into());
        }
    };

    match verify_password(&payload.password, &user.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(user_id = %user.id, "Failed login attempt");
            return error_response(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return error_response(AppError::Internal("credential check failed".to_string()));
        }
    }

    info!(user_id = %user.id, "User logged in");

    (
        StatusCode::OK,
        Json(json!({
            "user_id": user.id,
            "username": user.username,
        })),
    )
        .into_response()
}
