//! Database migrations.
//!
//! Migrations are managed using sea-orm-migration and stay within the
//! portable schema DSL so the same migrator runs on Postgres and on the
//! in-memory SQLite databases used by the test suites.

pub use sea_orm_migration::prelude::*;

mod m20260815_000001_initial;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260815_000001_initial::Migration)]
    }
}
