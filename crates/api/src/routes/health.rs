//! Health check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Creates the health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness probe response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
}

/// GET /health - Liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
