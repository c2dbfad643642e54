//! Ledger entry routes: incomes, expenses, assets, and debts.
//!
//! Every mutation refreshes the owner's period summaries before the
//! response is sent, so a caller immediately reads its own write.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use saku_core::ledger::EntryKind;
use saku_db::{LedgerEntryRow, LedgerRepository, SummaryRepository};

use crate::AppState;
use crate::routes::error_response;

/// Creates the ledger routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add-income/{user_id}", post(add_income))
        .route("/income/{id}", get(list_income).delete(delete_income))
        .route("/add-expense/{user_id}", post(add_expense))
        .route("/expenses/{id}", get(list_expenses).delete(delete_expense))
        .route("/add-asset/{user_id}", post(add_asset))
        .route("/assets/{id}", get(list_assets).delete(delete_asset))
        .route("/add-debt/{user_id}", post(add_debt))
        .route("/debts/{id}", get(list_debts).delete(delete_debt))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for adding an income entry.
#[derive(Debug, Deserialize)]
pub struct AddIncomeRequest {
    /// Where the money came from.
    pub source: String,
    /// Amount received.
    pub amount: Decimal,
    /// Date of receipt.
    pub date: NaiveDate,
}

/// Request body for adding an expense entry.
#[derive(Debug, Deserialize)]
pub struct AddExpenseRequest {
    /// Spending category.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Date of the expense.
    pub date: NaiveDate,
}

/// Request body for adding an asset.
#[derive(Debug, Deserialize)]
pub struct AddAssetRequest {
    /// Asset category.
    pub category: String,
    /// Current value.
    pub value: Decimal,
    /// Date the asset was recorded.
    pub date_added: NaiveDate,
}

/// Request body for adding a debt.
#[derive(Debug, Deserialize)]
pub struct AddDebtRequest {
    /// Debt category.
    pub category: String,
    /// Outstanding amount.
    pub amount: Decimal,
    /// Date the debt was incurred.
    pub date_incurred: NaiveDate,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /add-income/{user_id} - Record an income entry.
async fn add_income(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddIncomeRequest>,
) -> impl IntoResponse {
    match append_entry(
        &state,
        user_id,
        EntryKind::Income,
        &payload.source,
        payload.amount,
        payload.date,
    )
    .await
    {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "income_id": id }))).into_response(),
        Err(resp) => resp,
    }
}

/// GET /income/{user_id} - List a user's income entries.
async fn list_income(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    list_entries(&state, user_id, EntryKind::Income).await
}

/// DELETE /income/{income_id} - Delete an income entry.
async fn delete_income(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    delete_entry(&state, EntryKind::Income, id).await
}

/// POST /add-expense/{user_id} - Record an expense entry.
async fn add_expense(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddExpenseRequest>,
) -> impl IntoResponse {
    match append_entry(
        &state,
        user_id,
        EntryKind::Expense,
        &payload.category,
        payload.amount,
        payload.date,
    )
    .await
    {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "expense_id": id }))).into_response(),
        Err(resp) => resp,
    }
}

/// GET /expenses/{user_id} - List a user's expenses.
async fn list_expenses(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    list_entries(&state, user_id, EntryKind::Expense).await
}

/// DELETE /expenses/{expense_id} - Delete an expense entry.
async fn delete_expense(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    delete_entry(&state, EntryKind::Expense, id).await
}

/// POST /add-asset/{user_id} - Record an asset.
async fn add_asset(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddAssetRequest>,
) -> impl IntoResponse {
    match append_entry(
        &state,
        user_id,
        EntryKind::Asset,
        &payload.category,
        payload.value,
        payload.date_added,
    )
    .await
    {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "asset_id": id }))).into_response(),
        Err(resp) => resp,
    }
}

/// GET /assets/{user_id} - List a user's assets.
async fn list_assets(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    list_entries(&state, user_id, EntryKind::Asset).await
}

/// DELETE /assets/{asset_id} - Delete an asset.
async fn delete_asset(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    delete_entry(&state, EntryKind::Asset, id).await
}

/// POST /add-debt/{user_id} - Record a debt.
async fn add_debt(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddDebtRequest>,
) -> impl IntoResponse {
    match append_entry(
        &state,
        user_id,
        EntryKind::Debt,
        &payload.category,
        payload.amount,
        payload.date_incurred,
    )
    .await
    {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "debt_id": id }))).into_response(),
        Err(resp) => resp,
    }
}

/// GET /debts/{user_id} - List a user's debts.
async fn list_debts(State(state): State<AppState>, Path(user_id): Path<Uuid>) -> Response {
    list_entries(&state, user_id, EntryKind::Debt).await
}

/// DELETE /debts/{debt_id} - Delete a debt.
async fn delete_debt(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    delete_entry(&state, EntryKind::Debt, id).await
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Rebuilds the user's period summaries after a ledger mutation.
async fn refresh_summaries(state: &AppState, user_id: Uuid) -> Result<(), Response> {
    let summaries = SummaryRepository::new(state.db.clone(), state.refresh_locks.clone());

    if let Err(e) = summaries.refresh(user_id).await {
        error!(error = %e, user_id = %user_id, "Failed to refresh period summaries");
        return Err(error_response(e.into()));
    }

    Ok(())
}

/// Validates and inserts an entry, then refreshes the owner's summaries.
async fn append_entry(
    state: &AppState,
    user_id: Uuid,
    kind: EntryKind,
    label: &str,
    amount: Decimal,
    date: NaiveDate,
) -> Result<Uuid, Response> {
    let ledger = LedgerRepository::new(state.db.clone());

    let id = match ledger.append(user_id, kind, label, amount, date).await {
        Ok(id) => id,
        Err(e) => {
            error!(error = %e, kind = %kind, "Failed to append ledger entry");
            return Err(error_response(e.into()));
        }
    };

    refresh_summaries(state, user_id).await?;

    info!(user_id = %user_id, entry_id = %id, kind = %kind, "Ledger entry added");
    Ok(id)
}

/// Deletes an entry, refreshes the owner's summaries, and reports success.
async fn delete_entry(state: &AppState, kind: EntryKind, id: Uuid) -> Response {
    let ledger = LedgerRepository::new(state.db.clone());

    let owner = match ledger.delete(kind, id).await {
        Ok(owner) => owner,
        Err(e) => {
            error!(error = %e, kind = %kind, "Failed to delete ledger entry");
            return error_response(e.into());
        }
    };

    if let Err(resp) = refresh_summaries(state, owner).await {
        return resp;
    }

    info!(entry_id = %id, kind = %kind, "Ledger entry deleted");

    (
        StatusCode::OK,
        Json(json!({ "message": format!("{kind} deleted successfully") })),
    )
        .into_response()
}

/// Lists a user's entries of one kind with that kind's field names.
async fn list_entries(state: &AppState, user_id: Uuid, kind: EntryKind) -> Response {
    let ledger = LedgerRepository::new(state.db.clone());

    match ledger.list(user_id, kind).await {
        Ok(rows) => {
            let body: Vec<serde_json::Value> = rows.iter().map(|r| entry_json(kind, r)).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            error!(error = %e, kind = %kind, "Failed to list ledger entries");
            error_response(e.into())
        }
    }
}

/// Serializes a row under the column names of its kind's table.
fn entry_json(kind: EntryKind, row: &LedgerEntryRow) -> serde_json::Value {
    match kind {
        EntryKind::Income => json!({
            "id": row.id,
            "source": row.label,
            "amount": row.amount,
            "date": row.date,
        }),
        EntryKind::Expense => json!({
            "id": row.id,
            "category": row.label,
            "amount": row.amount,
            "date": row.date,
        }),
        EntryKind::Asset => json!({
            "id": row.id,
            "category": row.label,
            "value": row.amount,
            "date_added": row.date,
        }),
        EntryKind::Debt => json!({
            "id": row.id,
            "category": row.label,
            "amount": row.amount,
            "date_incurred": row.date,
        }),
    }
}
