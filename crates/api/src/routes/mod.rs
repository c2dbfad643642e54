//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use saku_shared::AppError;
use serde_json::json;

use crate::AppState;

pub mod auth;
pub mod budgets;
pub mod dashboard;
pub mod health;
pub mod ledger;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(ledger::routes())
        .merge(budgets::routes())
        .merge(dashboard::routes())
}

/// Renders an application error as its mapped status plus the
/// `{"error", "message"}` envelope.
pub(crate) fn error_response(err: AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string(),
        })),
    )
        .into_response()
}
