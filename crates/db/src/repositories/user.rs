//! User repository for account storage and credential lookup.

use rust_decimal::Decimal;
use saku_core::ledger::{EntryValidationError, validate_savings_goal};
use saku_shared::AppError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::users;
use crate::repositories::{db_error_to_app, is_unique_violation};

/// Error types for user operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Username is already registered.
    #[error("Username already registered: {0}")]
    UsernameTaken(String),

    /// User not found.
    #[error("User not found: {0}")]
    NotFound(Uuid),

    /// Input failed a business rule.
    #[error(transparent)]
    Validation(#[from] EntryValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameTaken(_) => Self::Conflict(err.to_string()),
            UserError::NotFound(id) => Self::UserNotFound(id),
            UserError::Validation(e) => Self::Validation(e.to_string()),
            UserError::Database(e) => db_error_to_app(&e),
        }
    }
}

/// User repository for account CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user with a zero savings goal.
    ///
    /// The caller is responsible for hashing the password; this method
    /// never sees plain-text credentials.
    ///
    /// # Errors
    ///
    /// Returns `UserError::UsernameTaken` if the username is already
    /// registered, or a database error if the insert fails.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<users::Model, UserError> {
        if self.username_exists(username).await? {
            return Err(UserError::UsernameTaken(username.to_string()));
        }

        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            savings_goal: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match user.insert(&self.db).await {
            Ok(model) => Ok(model),
            // Concurrent registrations can slip past the pre-check; the
            // unique index on username is the arbiter.
            Err(err) if is_unique_violation(&err) => {
                Err(UserError::UsernameTaken(username.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, UserError> {
        Ok(users::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<users::Model>, UserError> {
        Ok(users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Checks if a username is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn username_exists(&self, username: &str) -> Result<bool, UserError> {
        let count = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a user's savings goal. Zero clears the goal.
    ///
    /// # Errors
    ///
    /// Returns a validation error for negative goals,
    /// `UserError::NotFound` for unknown users, or a database error.
    pub async fn update_savings_goal(
        &self,
        user_id: Uuid,
        goal: Decimal,
    ) -> Result<users::Model, UserError> {
        validate_savings_goal(goal)?;

        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let mut active: users::ActiveModel = user.into();
        active.savings_goal = Set(goal);
        active.updated_at = Set(chrono::Utc::now().into());

        Ok(active.update(&self.db).await?)
    }
}
