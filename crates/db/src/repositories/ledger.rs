//! Ledger repository covering the four entry tables.
//!
//! One repository fronts incomes, expenses, assets, and debts. Callers
//! select a table with [`EntryKind`] and get a uniform row view back;
//! the per-table column names (`source` vs `category`, `value` vs
//! `amount`) stay an implementation detail of this module.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use saku_core::ledger::{EntryKind, EntryValidationError, validate_entry};
use saku_shared::AppError;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{assets, debts, expenses, incomes, users};
use crate::repositories::db_error_to_app;

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// No entry with this ID in the table for its kind.
    #[error("{0} not found: {1}")]
    NotFound(EntryKind, Uuid),

    /// Owning user does not exist.
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    /// Input failed a business rule.
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(..) => Self::NotFound(err.to_string()),
            LedgerError::UserNotFound(id) => Self::UserNotFound(id),
            LedgerError::Validation(e) => Self::Validation(e.to_string()),
            LedgerError::Database(e) => db_error_to_app(&e),
        }
    }
}

/// Uniform view over a row from any of the four ledger tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntryRow {
    /// Row ID.
    pub id: Uuid,
    /// `source` for incomes, `category` for the other tables.
    pub label: String,
    /// Monetary amount (`value` for assets).
    pub amount: Decimal,
    /// Entry date as recorded by the user.
    pub date: NaiveDate,
    /// Insertion timestamp.
    pub created_at: DateTimeWithTimeZone,
}

/// Repository for the income, expense, asset, and debt tables.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
}

impl LedgerRepository {
    /// Creates a new ledger repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_user(&self, user_id: Uuid) -> Result<(), LedgerError> {
        let count = users::Entity::find_by_id(user_id).count(&self.db).await?;
        if count == 0 {
            return Err(LedgerError::UserNotFound(user_id));
        }
        Ok(())
    }

    /// Validates and appends an entry, returning its new ID.
    ///
    /// The label is trimmed before storage.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UserNotFound` for unknown users, a
    /// validation error for bad input, or a database error.
    pub async fn append(
        &self,
        user_id: Uuid,
        kind: EntryKind,
        label: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Uuid, LedgerError> {
        self.ensure_user(user_id).await?;
        let label = validate_entry(label, amount)?.to_string();

        let id = Uuid::now_v7();
        let now = chrono::Utc::now().into();

        match kind {
            EntryKind::Income => {
                incomes::ActiveModel {
                    id: Set(id),
                    user_id: Set(user_id),
                    source: Set(label),
                    amount: Set(amount),
                    date: Set(date),
                    created_at: Set(now),
                }
                .insert(&self.db)
                .await?;
            }
            EntryKind::Expense => {
                expenses::ActiveModel {
                    id: Set(id),
                    user_id: Set(user_id),
                    category: Set(label),
                    amount: Set(amount),
                    date: Set(date),
                    created_at: Set(now),
                }
                .insert(&self.db)
                .await?;
            }
            EntryKind::Asset => {
                assets::ActiveModel {
                    id: Set(id),
                    user_id: Set(user_id),
                    category: Set(label),
                    value: Set(amount),
                    date_added: Set(date),
                    created_at: Set(now),
                }
                .insert(&self.db)
                .await?;
            }
            EntryKind::Debt => {
                debts::ActiveModel {
                    id: Set(id),
                    user_id: Set(user_id),
                    category: Set(label),
                    amount: Set(amount),
                    date_incurred: Set(date),
                    created_at: Set(now),
                }
                .insert(&self.db)
                .await?;
            }
        }

        Ok(id)
    }

    /// Deletes an entry by ID, returning the owning user's ID so callers
    /// can refresh that user's period summaries.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NotFound` if no entry of this kind has the
    /// given ID, or a database error.
    pub async fn delete(&self, kind: EntryKind, id: Uuid) -> Result<Uuid, LedgerError> {
        let owner = match kind {
            EntryKind::Income => incomes::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|m| m.user_id),
            EntryKind::Expense => expenses::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|m| m.user_id),
            EntryKind::Asset => assets::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|m| m.user_id),
            EntryKind::Debt => debts::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(|m| m.user_id),
        }
        .ok_or(LedgerError::NotFound(kind, id))?;

        match kind {
            EntryKind::Income => {
                incomes::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            EntryKind::Expense => {
                expenses::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            EntryKind::Asset => {
                assets::Entity::delete_by_id(id).exec(&self.db).await?;
            }
            EntryKind::Debt => {
                debts::Entity::delete_by_id(id).exec(&self.db).await?;
            }
        }

        Ok(owner)
    }

    /// Lists a user's entries of one kind, newest entry date first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UserNotFound` for unknown users, or a
    /// database error.
    pub async fn list(
        &self,
        user_id: Uuid,
        kind: EntryKind,
    ) -> Result<Vec<LedgerEntryRow>, LedgerError> {
        self.ensure_user(user_id).await?;

        let rows = match kind {
            EntryKind::Income => incomes::Entity::find()
                .filter(incomes::Column::UserId.eq(user_id))
                .order_by_desc(incomes::Column::Date)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| LedgerEntryRow {
                    id: m.id,
                    label: m.source,
                    amount: m.amount,
                    date: m.date,
                    created_at: m.created_at,
                })
                .collect(),
            EntryKind::Expense => expenses::Entity::find()
                .filter(expenses::Column::UserId.eq(user_id))
                .order_by_desc(expenses::Column::Date)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| LedgerEntryRow {
                    id: m.id,
                    label: m.category,
                    amount: m.amount,
                    date: m.date,
                    created_at: m.created_at,
                })
                .collect(),
            EntryKind::Asset => assets::Entity::find()
                .filter(assets::Column::UserId.eq(user_id))
                .order_by_desc(assets::Column::DateAdded)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| LedgerEntryRow {
                    id: m.id,
                    label: m.category,
                    amount: m.value,
                    date: m.date_added,
                    created_at: m.created_at,
                })
                .collect(),
            EntryKind::Debt => debts::Entity::find()
                .filter(debts::Column::UserId.eq(user_id))
                .order_by_desc(debts::Column::DateIncurred)
                .all(&self.db)
                .await?
                .into_iter()
                .map(|m| LedgerEntryRow {
                    id: m.id,
                    label: m.category,
                    amount: m.amount,
                    date: m.date_incurred,
                    created_at: m.created_at,
                })
                .collect(),
        };

        Ok(rows)
    }

    /// Sums a user's entries of one kind, optionally restricted to a
    /// single label. Returns zero when no rows match.
    ///
    /// Totals are folded in application code so every backend gets
    /// exact decimal arithmetic.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UserNotFound` for unknown users, or a
    /// database error.
    pub async fn sum(
        &self,
        user_id: Uuid,
        kind: EntryKind,
        label: Option<&str>,
    ) -> Result<Decimal, LedgerError> {
        self.ensure_user(user_id).await?;

        let total: Decimal = match kind {
            EntryKind::Income => {
                let mut query =
                    incomes::Entity::find().filter(incomes::Column::UserId.eq(user_id));
                if let Some(label) = label {
                    query = query.filter(incomes::Column::Source.eq(label));
                }
                query.all(&self.db).await?.iter().map(|m| m.amount).sum()
            }
            EntryKind::Expense => {
                let mut query =
                    expenses::Entity::find().filter(expenses::Column::UserId.eq(user_id));
                if let Some(label) = label {
                    query = query.filter(expenses::Column::Category.eq(label));
                }
                query.all(&self.db).await?.iter().map(|m| m.amount).sum()
            }
            EntryKind::Asset => {
                let mut query = assets::Entity::find().filter(assets::Column::UserId.eq(user_id));
                if let Some(label) = label {
                    query = query.filter(assets::Column::Category.eq(label));
                }
                query.all(&self.db).await?.iter().map(|m| m.value).sum()
            }
            EntryKind::Debt => {
                let mut query = debts::Entity::find().filter(debts::Column::UserId.eq(user_id));
                if let Some(label) = label {
                    query = query.filter(debts::Column::Category.eq(label));
                }
                query.all(&self.db).await?.iter().map(|m| m.amount).sum()
            }
        };

        Ok(total)
    }
}
