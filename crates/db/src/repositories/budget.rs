//! Budget repository for per-category spending limits.

use rust_decimal::Decimal;
use saku_core::budget::{BudgetComparison, compare_budgets};
use saku_core::ledger::{EntryValidationError, validate_amount, validate_entry};
use saku_shared::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::{budgets, expenses, users};
use crate::repositories::{db_error_to_app, is_unique_violation};

/// Error types for budget operations.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Budget not found.
    #[error("Budget not found: {0}")]
    NotFound(Uuid),

    /// Owning user does not exist.
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    /// A budget already exists for this category.
    #[error("Budget already exists for category: {0}")]
    DuplicateCategory(String),

    /// Input failed a business rule.
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::NotFound(_) => Self::NotFound(err.to_string()),
            BudgetError::UserNotFound(id) => Self::UserNotFound(id),
            BudgetError::DuplicateCategory(_) => Self::Conflict(err.to_string()),
            BudgetError::Validation(e) => Self::Validation(e.to_string()),
            BudgetError::Database(e) => db_error_to_app(&e),
        }
    }
}

/// Budget repository for CRUD and budget-vs-actual comparison.
#[derive(Debug, Clone)]
pub struct BudgetRepository {
    db: DatabaseConnection,
}

impl BudgetRepository {
    /// Creates a new budget repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_user(&self, user_id: Uuid) -> Result<(), BudgetError> {
        let count = users::Entity::find_by_id(user_id).count(&self.db).await?;
        if count == 0 {
            return Err(BudgetError::UserNotFound(user_id));
        }
        Ok(())
    }

    /// Creates a budget for a category. Each user may hold at most one
    /// budget per category.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UserNotFound` for unknown users,
    /// `BudgetError::DuplicateCategory` if the category already has a
    /// budget, a validation error for bad input, or a database error.
    pub async fn create(
        &self,
        user_id: Uuid,
        category: &str,
        budget_amount: Decimal,
    ) -> Result<budgets::Model, BudgetError> {
        self.ensure_user(user_id).await?;
        let category = validate_entry(category, budget_amount)?.to_string();

        let existing = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .filter(budgets::Column::Category.eq(category.clone()))
            .count(&self.db)
            .await?;
        if existing > 0 {
            return Err(BudgetError::DuplicateCategory(category));
        }

        let now = chrono::Utc::now().into();
        let budget = budgets::ActiveModel {
            id: Set(Uuid::now_v7()),
            user_id: Set(user_id),
            category: Set(category.clone()),
            budget_amount: Set(budget_amount),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match budget.insert(&self.db).await {
            Ok(model) => Ok(model),
            // The unique index on (user_id, category) backs up the
            // pre-check under concurrent creates.
            Err(err) if is_unique_violation(&err) => {
                Err(BudgetError::DuplicateCategory(category))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists a user's budgets ordered by category.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UserNotFound` for unknown users, or a
    /// database error.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<budgets::Model>, BudgetError> {
        self.ensure_user(user_id).await?;

        Ok(budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .order_by_asc(budgets::Column::Category)
            .all(&self.db)
            .await?)
    }

    /// Updates a budget's amount.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` if no budget has this ID, a
    /// validation error for non-positive amounts, or a database error.
    pub async fn update_amount(
        &self,
        budget_id: Uuid,
        budget_amount: Decimal,
    ) -> Result<budgets::Model, BudgetError> {
        validate_amount(budget_amount)?;

        let budget = budgets::Entity::find_by_id(budget_id)
            .one(&self.db)
            .await?
            .ok_or(BudgetError::NotFound(budget_id))?;

        let mut active: budgets::ActiveModel = budget.into();
        active.budget_amount = Set(budget_amount);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }

    /// Deletes a budget by ID.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotFound` if no budget has this ID, or a
    /// database error.
    pub async fn delete(&self, budget_id: Uuid) -> Result<(), BudgetError> {
        let budget = budgets::Entity::find_by_id(budget_id)
            .one(&self.db)
            .await?
            .ok_or(BudgetError::NotFound(budget_id))?;

        budgets::Entity::delete_by_id(budget.id)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Compares a user's budgets against actual spending per category.
    ///
    /// Categories with a budget but no spending and categories with
    /// spending but no budget both appear in the result.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UserNotFound` for unknown users, or a
    /// database error.
    pub async fn vs_actual(&self, user_id: Uuid) -> Result<Vec<BudgetComparison>, BudgetError> {
        self.ensure_user(user_id).await?;

        let budgeted: Vec<(String, Decimal)> = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.category, m.budget_amount))
            .collect();

        let spent: Vec<(String, Decimal)> = expenses::Entity::find()
            .filter(expenses::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|m| (m.category, m.amount))
            .collect();

        Ok(compare_budgets(budgeted, spent))
    }
}
