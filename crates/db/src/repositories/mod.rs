//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Each repository owns its error enum and maps it onto the shared
//! application error taxonomy.

use sea_orm::{DbErr, SqlErr};

pub mod budget;
pub mod ledger;
pub mod summary;
pub mod user;

pub use budget::{BudgetError, BudgetRepository};
pub use ledger::{LedgerEntryRow, LedgerError, LedgerRepository};
pub use summary::{RefreshLocks, SummaryError, SummaryRepository};
pub use user::{UserError, UserRepository};

/// True when the error is a unique constraint violation, on any backend.
pub(crate) fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// True when the error means the store itself is unreachable rather than
/// the statement being bad.
pub(crate) fn is_connection_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

/// Maps a raw database error onto the shared taxonomy, hiding driver
/// detail from API consumers.
pub(crate) fn db_error_to_app(err: &DbErr) -> saku_shared::AppError {
    if is_connection_error(err) {
        saku_shared::AppError::StoreUnavailable("datastore unreachable".to_string())
    } else {
        saku_shared::AppError::Database("operation failed".to_string())
    }
}
