//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//! - The per-user refresh lock registry

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    BudgetError, BudgetRepository, LedgerEntryRow, LedgerError, LedgerRepository, RefreshLocks,
    SummaryError, SummaryRepository, UserError, UserRepository,
};

use saku_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    Database::connect(options).await
}
