//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for registration, the ledger, budgets, and dashboard reads
//! - Application state shared across handlers

pub mod routes;

use axum::Router;
use saku_db::RefreshLocks;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Per-user refresh locks. Shared here so concurrent requests for
    /// the same user serialize their summary rebuilds.
    pub refresh_locks: RefreshLocks,
}

impl AppState {
    /// Creates application state over a database connection.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            refresh_locks: RefreshLocks::new(),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
