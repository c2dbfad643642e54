//! Integration tests for the summary repository's refresh pipeline.

use chrono::NaiveDate;
use futures::future::try_join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use saku_core::ledger::EntryKind;
use saku_db::entities::period_summaries;
use saku_db::migration::{Migrator, MigratorTrait};
use saku_db::{LedgerRepository, RefreshLocks, SummaryRepository, UserRepository};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

/// Fresh in-memory database with the schema applied.
async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

async fn create_user(db: &DatabaseConnection, username: &str) -> Uuid {
    UserRepository::new(db.clone())
        .create(username, "$argon2id$test_hash")
        .await
        .expect("Failed to create user")
        .id
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Projection that ignores row IDs and refresh timestamps, which change
/// on every rebuild.
fn periods(rows: &[period_summaries::Model]) -> Vec<(i32, i32, Decimal, Decimal)> {
    rows.iter()
        .map(|r| (r.year, r.month, r.total_income, r.total_expenses))
        .collect()
}

#[tokio::test]
async fn test_refresh_buckets_by_month() {
    let db = setup().await;
    let user_id = create_user(&db, "alice").await;
    let ledger = LedgerRepository::new(db.clone());
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    ledger
        .append(
            user_id,
            EntryKind::Income,
            "Salary",
            dec!(5000),
            date(2024, 1, 15),
        )
        .await
        .expect("Failed to append income");
    ledger
        .append(
            user_id,
            EntryKind::Income,
            "Salary",
            dec!(5200),
            date(2024, 2, 10),
        )
        .await
        .expect("Failed to append income");
    ledger
        .append(
            user_id,
            EntryKind::Expense,
            "Rent",
            dec!(1500),
            date(2024, 1, 20),
        )
        .await
        .expect("Failed to append expense");
    ledger
        .append(
            user_id,
            EntryKind::Expense,
            "Food",
            dec!(800),
            date(2024, 3, 5),
        )
        .await
        .expect("Failed to append expense");

    let rows = summaries.refresh(user_id).await.expect("Failed to refresh");

    // Months on only one side still get a row, with zero on the other
    assert_eq!(
        periods(&rows),
        vec![
            (2024, 1, dec!(5000), dec!(1500)),
            (2024, 2, dec!(5200), Decimal::ZERO),
            (2024, 3, Decimal::ZERO, dec!(800)),
        ]
    );
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let db = setup().await;
    let user_id = create_user(&db, "bob").await;
    let ledger = LedgerRepository::new(db.clone());
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    ledger
        .append(
            user_id,
            EntryKind::Income,
            "Salary",
            dec!(4000),
            date(2024, 6, 1),
        )
        .await
        .expect("Failed to append income");

    let first = summaries.refresh(user_id).await.expect("Failed to refresh");
    let second = summaries.refresh(user_id).await.expect("Failed to refresh");

    assert_eq!(periods(&first), periods(&second));

    // No duplication or accumulation in the stored rows either
    let stored = summaries.list(user_id).await.expect("Failed to list");
    assert_eq!(periods(&stored), periods(&second));
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_refresh_unknown_user_yields_no_rows() {
    let db = setup().await;
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    let rows = summaries
        .refresh(Uuid::now_v7())
        .await
        .expect("Refresh for an unknown user is a no-op");

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_refresh_after_delete_updates_cache() {
    let db = setup().await;
    let user_id = create_user(&db, "carol").await;
    let ledger = LedgerRepository::new(db.clone());
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    ledger
        .append(
            user_id,
            EntryKind::Income,
            "Salary",
            dec!(4000),
            date(2024, 1, 1),
        )
        .await
        .expect("Failed to append income");
    let second_income = ledger
        .append(
            user_id,
            EntryKind::Income,
            "Bonus",
            dec!(900),
            date(2024, 2, 1),
        )
        .await
        .expect("Failed to append income");

    let before = summaries.refresh(user_id).await.expect("Failed to refresh");
    assert_eq!(before.len(), 2);

    ledger
        .delete(EntryKind::Income, second_income)
        .await
        .expect("Failed to delete income");

    let after = summaries.refresh(user_id).await.expect("Failed to refresh");
    assert_eq!(periods(&after), vec![(2024, 1, dec!(4000), Decimal::ZERO)]);

    let stored = summaries.list(user_id).await.expect("Failed to list");
    assert_eq!(periods(&stored), periods(&after));
}

#[tokio::test]
async fn test_list_without_refresh_is_empty() {
    let db = setup().await;
    let user_id = create_user(&db, "dave").await;
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    let rows = summaries.list(user_id).await.expect("Failed to list");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_concurrent_refreshes_for_same_user() {
    let db = setup().await;
    let user_id = create_user(&db, "erin").await;
    let ledger = LedgerRepository::new(db.clone());
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    for month in 1..=4 {
        ledger
            .append(
                user_id,
                EntryKind::Income,
                "Salary",
                dec!(1000),
                date(2024, month, 1),
            )
            .await
            .expect("Failed to append income");
    }

    // All refreshes serialize on the per-user lock; none may observe a
    // half-rebuilt cache.
    let results = try_join_all((0..4).map(|_| summaries.refresh(user_id)))
        .await
        .expect("Concurrent refreshes should all succeed");

    for rows in &results {
        assert_eq!(rows.len(), 4);
    }

    let stored = summaries.list(user_id).await.expect("Failed to list");
    assert_eq!(stored.len(), 4);
    assert_eq!(
        periods(&stored),
        vec![
            (2024, 1, dec!(1000), Decimal::ZERO),
            (2024, 2, dec!(1000), Decimal::ZERO),
            (2024, 3, dec!(1000), Decimal::ZERO),
            (2024, 4, dec!(1000), Decimal::ZERO),
        ]
    );
}

#[tokio::test]
async fn test_refreshes_scoped_to_one_user() {
    let db = setup().await;
    let first = create_user(&db, "frank").await;
    let second = create_user(&db, "grace").await;
    let ledger = LedgerRepository::new(db.clone());
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    ledger
        .append(
            first,
            EntryKind::Income,
            "Salary",
            dec!(1000),
            date(2024, 1, 1),
        )
        .await
        .expect("Failed to append income");
    ledger
        .append(
            second,
            EntryKind::Income,
            "Salary",
            dec!(2000),
            date(2024, 1, 1),
        )
        .await
        .expect("Failed to append income");

    summaries.refresh(first).await.expect("Failed to refresh");
    summaries.refresh(second).await.expect("Failed to refresh");

    // Refreshing one user never disturbs the other's rows
    summaries.refresh(first).await.expect("Failed to refresh");

    let rows = summaries.list(second).await.expect("Failed to list");
    assert_eq!(periods(&rows), vec![(2024, 1, dec!(2000), Decimal::ZERO)]);
}
