//! Period summary repository: the monthly aggregation pipeline.
//!
//! `refresh` rebuilds a user's cached per-month rows wholesale
//! (delete-then-reinsert inside one transaction) so repeated refreshes
//! with no intervening mutation produce identical rows. A per-user
//! async mutex keeps two refreshes for the same user from interleaving;
//! refreshes for different users run in parallel.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use rust_decimal::Decimal;
use saku_core::summary::summarize_periods;
use saku_shared::AppError;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
    TransactionTrait,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::entities::{expenses, incomes, period_summaries};
use crate::repositories::db_error_to_app;

/// Error types for summary operations.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::Database(e) => db_error_to_app(&e),
        }
    }
}

/// Registry of per-user refresh locks.
///
/// Shared through application state so every request handler serializes
/// on the same mutex for a given user.
#[derive(Debug, Clone, Default)]
pub struct RefreshLocks {
    locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl RefreshLocks {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for a user, creating it on first use.
    fn lock_for(&self, user_id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }
}

/// Repository for the cached per-month income/expense summaries.
#[derive(Debug, Clone)]
pub struct SummaryRepository {
    db: DatabaseConnection,
    locks: RefreshLocks,
}

impl SummaryRepository {
    /// Creates a new summary repository sharing the given lock registry.
    #[must_use]
    pub const fn new(db: DatabaseConnection, locks: RefreshLocks) -> Self {
        Self { db, locks }
    }

    /// Rebuilds the cached monthly summaries for one user and returns
    /// the fresh rows in ascending (year, month) order.
    ///
    /// A user with no ledger entries (including an unknown user) ends
    /// up with zero rows; that is the no-data path, not a failure.
    ///
    /// # Errors
    ///
    /// Returns a database error if reading the ledger or writing the
    /// cache fails; the write transaction aborts atomically, leaving
    /// previously cached rows untouched.
    #[allow(clippy::cast_possible_wrap)] // months are 1..=12
    pub async fn refresh(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<period_summaries::Model>, SummaryError> {
        let lock = self.locks.lock_for(user_id);
        let _guard = lock.lock().await;

        let income_rows: Vec<(NaiveDate, Decimal)> = incomes::Entity::find()
            .filter(incomes::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.date, m.amount))
            .collect();

        let expense_rows: Vec<(NaiveDate, Decimal)> = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.date, m.amount))
            .collect();

        let refreshed_at = chrono::Utc::now().into();
        let rows: Vec<period_summaries::Model> = summarize_periods(&income_rows, &expense_rows)
            .into_iter()
            .map(|p| period_summaries::Model {
                id: Uuid::now_v7(),
                user_id,
                year: p.year,
                month: p.month as i32,
                total_income: p.total_income,
                total_expenses: p.total_expenses,
                refreshed_at,
            })
            .collect();

        let txn = self.db.begin().await?;

        period_summaries::Entity::delete_many()
            .filter(period_summaries::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        if !rows.is_empty() {
            let models = rows.iter().cloned().map(IntoActiveModel::into_active_model);
            period_summaries::Entity::insert_many(models)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, rows = rows.len(), "Rebuilt period summaries");

        Ok(rows)
    }

    /// Reads the cached rows for a user in ascending (year, month)
    /// order, without refreshing first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<period_summaries::Model>, SummaryError> {
        Ok(period_summaries::Entity::find()
            .filter(period_summaries::Column::UserId.eq(user_id))
            .order_by_asc(period_summaries::Column::Year)
            .order_by_asc(period_summaries::Column::Month)
            .all(&self.db)
            .await?)
    }
}
