//! Budget routes.
//!
//! `/budgets/{id}` carries a user id for GET/POST and a budget id for
//! PUT/DELETE; the handlers interpret the one path parameter per method.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use saku_db::BudgetRepository;
use saku_db::entities::budgets;

use crate::AppState;
use crate::routes::error_response;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/budgets/{id}",
            post(create_budget)
                .get(list_budgets)
                .put(update_budget)
                .delete(delete_budget),
        )
        .route("/budgets/{id}/vs-actual", get(budget_vs_actual))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating a budget.
#[derive(Debug, Deserialize)]
pub struct CreateBudgetRequest {
    /// Spending category; at most one budget per category and user.
    pub category: String,
    /// Ceiling amount for the category.
    pub budget_amount: Decimal,
}

/// Request body for updating a budget's ceiling.
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    /// New ceiling amount.
    pub budget_amount: Decimal,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /budgets/{user_id} - Create a budget for a category.
async fn create_budget(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<CreateBudgetRequest>,
) -> impl IntoResponse {
    let repo = BudgetRepository::new(state.db.clone());

    match repo
        .create(user_id, &payload.category, payload.budget_amount)
        .await
    {
        Ok(budget) => {
            info!(user_id = %user_id, budget_id = %budget.id, "Budget created");
            (StatusCode::CREATED, Json(json!({ "budget_id": budget.id }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create budget");
            error_response(e.into())
        }
    }
}

/// GET /budgets/{user_id} - List a user's budgets.
async fn list_budgets(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    let repo = BudgetRepository::new(state.db.clone());

    match repo.list(user_id).await {
        Ok(rows) => {
            let body: Vec<serde_json::Value> = rows.iter().map(budget_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list budgets");
            error_response(e.into())
        }
    }
}

/// PUT /budgets/{budget_id} - Update a budget's ceiling amount.
async fn update_budget(
    State(state): State<AppState>,
    Path(budget_id): Path<Uuid>,
    Json(payload): Json<UpdateBudgetRequest>,
) -> impl IntoResponse {
    let repo = BudgetRepository::new(state.db.clone());

    match repo.update_amount(budget_id, payload.budget_amount).await {
        Ok(budget) => {
            info!(budget_id = %budget.id, "Budget updated");
            (StatusCode::OK, Json(budget_json(&budget))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update budget");
            error_response(e.into())
        }
    }
}

/// DELETE /budgets/{budget_id} - Delete a budget.
async fn delete_budget(State(state): State<AppState>, Path(budget_id): Path<Uuid>) -> Response {
    let repo = BudgetRepository::new(state.db.clone());

    match repo.delete(budget_id).await {
        Ok(()) => {
            info!(budget_id = %budget_id, "Budget deleted");
            (
                StatusCode::OK,
                Json(json!({ "message": "Budget deleted successfully" })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to delete budget");
            error_response(e.into())
        }
    }
}

/// GET /budgets/{user_id}/vs-actual - Compare budgets with actual spend.
async fn budget_vs_actual(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    let repo = BudgetRepository::new(state.db.clone());

    match repo.vs_actual(user_id).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to compare budgets");
            error_response(e.into())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Serializes the client-facing view of a budget row.
fn budget_json(budget: &budgets::Model) -> serde_json::Value {
    json!({
        "id": budget.id,
        "category": budget.category,
        "budget_amount": budget.budget_amount,
    })
}
