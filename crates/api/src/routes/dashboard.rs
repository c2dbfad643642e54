//! Dashboard read routes: totals, summaries, breakdowns, and scores.
//!
//! Everything here is computed from the ledger at request time except
//! the monthly summary, which refreshes the cached rows first.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use saku_core::ledger::EntryKind;
use saku_core::summary::{
    breakdown_by_category, financial_summary, health_score, net_worth, savings_recommendation,
    totals,
};
use saku_db::entities::{period_summaries, users};
use saku_db::{LedgerRepository, SummaryRepository, UserRepository};
use saku_shared::AppError;

use crate::AppState;
use crate::routes::error_response;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/totals/{user_id}", get(get_totals))
        .route("/financial-summary/{user_id}", get(get_financial_summary))
        .route("/expense-breakdown/{user_id}", get(get_expense_breakdown))
        .route("/net-worth/{user_id}", get(get_net_worth))
        .route(
            "/savings-recommendations/{user_id}",
            get(get_savings_recommendations),
        )
        .route(
            "/financial-health-score/{user_id}",
            get(get_financial_health_score),
        )
        .route("/monthly-summary/{user_id}", get(get_monthly_summary))
        .route("/refresh-summary/{user_id}", post(refresh_summary))
        .route("/savings-goal/{user_id}", put(set_savings_goal))
}

/// Request body for setting the savings goal.
#[derive(Debug, Deserialize)]
pub struct SavingsGoalRequest {
    /// Target amount; zero clears the goal.
    pub savings_goal: Decimal,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /totals/{user_id} - Income, expense, and net savings totals.
async fn get_totals(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    match income_expense_totals(&state, user_id).await {
        Ok((income, expenses)) => (StatusCode::OK, Json(totals(income, expenses))).into_response(),
        Err(resp) => resp,
    }
}

/// GET /financial-summary/{user_id} - The full financial summary.
async fn get_financial_summary(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Response {
    let user = match require_user(&state, user_id).await {
        Ok(user) => user,
        Err(resp) => return resp,
    };

    match income_expense_totals(&state, user_id).await {
        Ok((income, expenses)) => (
            StatusCode::OK,
            Json(financial_summary(income, expenses, user.savings_goal)),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

/// GET /expense-breakdown/{user_id} - Spend per category, ascending.
async fn get_expense_breakdown(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Response {
    let ledger = LedgerRepository::new(state.db.clone());

    match ledger.list(user_id, EntryKind::Expense).await {
        Ok(rows) => {
            let spend =
                breakdown_by_category(rows.into_iter().map(|r| (r.label, r.amount)).collect());
            (StatusCode::OK, Json(spend)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to build expense breakdown");
            error_response(e.into())
        }
    }
}

/// GET /net-worth/{user_id} - Assets minus debts.
async fn get_net_worth(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    let ledger = LedgerRepository::new(state.db.clone());

    let assets = match ledger.sum(user_id, EntryKind::Asset, None).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to sum assets");
            return error_response(e.into());
        }
    };
    let debts = match ledger.sum(user_id, EntryKind::Debt, None).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to sum debts");
            return error_response(e.into());
        }
    };

    (StatusCode::OK, Json(net_worth(assets, debts))).into_response()
}

/// GET /savings-recommendations/{user_id} - The 20% rule applied.
async fn get_savings_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Response {
    match income_expense_totals(&state, user_id).await {
        Ok((income, expenses)) => (
            StatusCode::OK,
            Json(savings_recommendation(income, expenses)),
        )
            .into_response(),
        Err(resp) => resp,
    }
}

/// GET /financial-health-score/{user_id} - Savings-rate score and band.
async fn get_financial_health_score(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Response {
    match income_expense_totals(&state, user_id).await {
        Ok((income, expenses)) => {
            (StatusCode::OK, Json(health_score(income, expenses))).into_response()
        }
        Err(resp) => resp,
    }
}

/// GET /monthly-summary/{user_id} - Refresh, then report per-month rows.
async fn get_monthly_summary(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    if let Err(resp) = require_user(&state, user_id).await {
        return resp;
    }

    refreshed_rows(&state, user_id).await
}

/// POST /refresh-summary/{user_id} - Explicitly rebuild the cached rows.
///
/// An unknown user is the no-data path here: the rebuild produces zero
/// rows rather than failing.
async fn refresh_summary(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    refreshed_rows(&state, user_id).await
}

/// PUT /savings-goal/{user_id} - Set the user's savings goal.
async fn set_savings_goal(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<SavingsGoalRequest>,
) -> Response {
    let repo = UserRepository::new(state.db.clone());

    match repo.update_savings_goal(user_id, payload.savings_goal).await {
        Ok(user) => {
            info!(user_id = %user.id, "Savings goal updated");
            (
                StatusCode::OK,
                Json(json!({
                    "user_id": user.id,
                    "savings_goal": user.savings_goal,
                })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update savings goal");
            error_response(e.into())
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Loads a user or produces the not-found response.
async fn require_user(state: &AppState, user_id: Uuid) -> Result<users::Model, Response> {
    let repo = UserRepository::new(state.db.clone());

    match repo.find_by_id(user_id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(error_response(AppError::UserNotFound(user_id))),
        Err(e) => {
            error!(error = %e, "Failed to load user");
            Err(error_response(e.into()))
        }
    }
}

/// Sums a user's income and expense entries.
async fn income_expense_totals(
    state: &AppState,
    user_id: Uuid,
) -> Result<(Decimal, Decimal), Response> {
    let ledger = LedgerRepository::new(state.db.clone());

    let total_income = match ledger.sum(user_id, EntryKind::Income, None).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to sum incomes");
            return Err(error_response(e.into()));
        }
    };
    let total_expenses = match ledger.sum(user_id, EntryKind::Expense, None).await {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Failed to sum expenses");
            return Err(error_response(e.into()));
        }
    };

    Ok((total_income, total_expenses))
}

/// Rebuilds and serializes a user's per-month summary rows.
async fn refreshed_rows(state: &AppState, user_id: Uuid) -> Response {
    let summaries = SummaryRepository::new(state.db.clone(), state.refresh_locks.clone());

    match summaries.refresh(user_id).await {
        Ok(rows) => {
            let body: Vec<serde_json::Value> = rows.iter().map(period_json).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, user_id = %user_id, "Failed to refresh period summaries");
            error_response(e.into())
        }
    }
}

/// Serializes the client-facing view of a cached summary row.
fn period_json(row: &period_summaries::Model) -> serde_json::Value {
    json!({
        "year": row.year,
        "month": row.month,
        "total_income": row.total_income,
        "total_expenses": row.total_expenses,
    })
}
