//! Integration tests for the budget repository.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use saku_core::ledger::EntryKind;
use saku_db::migration::{Migrator, MigratorTrait};
use saku_db::{BudgetError, BudgetRepository, LedgerRepository, UserRepository};
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

#[tokio::test]
async fn test_create_and_list_budgets() {
    let db = setup().await;
    let user_id = create_user(&db, "alice").await;
    let repo = BudgetRepository::new(db.clone());

    let budget = repo
        .create(user_id, "Food", dec!(300.00))
        .await
        .expect("Failed to create budget");
    assert_eq!(budget.category, "Food");
    assert_eq!(budget.budget_amount, dec!(300.00));

    repo.create(user_id, "Transport", dec!(100))
        .await
        .expect("Failed to create budget");

    let budgets = repo.list(user_id).await.expect("Failed to list budgets");
    let categories: Vec<&str> = budgets.iter().map(|b| b.category.as_str()).collect();
    assert_eq!(categories, vec!["Food", "Transport"]);
}

#[tokio::test]
async fn test_create_duplicate_category_rejected() {
    let db = setup().await;
    let user_id = create_user(&db, "bob").await;
    let repo = BudgetRepository::new(db.clone());

    repo.create(user_id, "Food", dec!(300))
        .await
        .expect("Failed to create budget");

    let err = repo
        .create(user_id, "Food", dec!(500))
        .await
        .expect_err("Duplicate category should be rejected");

    assert!(matches!(err, BudgetError::DuplicateCategory(cat) if cat == "Food"));
}

#[tokio::test]
async fn test_same_category_allowed_across_users() {
    let db = setup().await;
    let first = create_user(&db, "carol").await;
    let second = create_user(&db, "dave").await;
    let repo = BudgetRepository::new(db.clone());

    repo.create(first, "Food", dec!(300))
        .await
        .expect("Failed to create budget");
    repo.create(second, "Food", dec!(450))
        .await
        .expect("Same category for another user should be allowed");
}

#[tokio::test]
async fn test_create_unknown_user_rejected() {
    let db = setup().await;
    let repo = BudgetRepository::new(db.clone());

    let err = repo
        .create(Uuid::now_v7(), "Food", dec!(300))
        .await
        .expect_err("Unknown user should be rejected");

    assert!(matches!(err, BudgetError::UserNotFound(_)));
}

#[tokio::test]
async fn test_create_non_positive_amount_rejected() {
    let db = setup().await;
    let user_id = create_user(&db, "erin").await;
    let repo = BudgetRepository::new(db.clone());

    let err = repo
        .create(user_id, "Food", Decimal::ZERO)
        .await
        .expect_err("Zero amount should be rejected");

    assert!(matches!(err, BudgetError::Validation(_)));
}

#[tokio::test]
async fn test_update_amount() {
    let db = setup().await;
    let user_id = create_user(&db, "frank").await;
    let repo = BudgetRepository::new(db.clone());

    let budget = repo
        .create(user_id, "Food", dec!(300))
        .await
        .expect("Failed to create budget");

    let updated = repo
        .update_amount(budget.id, dec!(350.50))
        .await
        .expect("Failed to update budget");

    assert_eq!(updated.id, budget.id);
    assert_eq!(updated.budget_amount, dec!(350.50));
    assert_eq!(updated.category, "Food");
}

#[tokio::test]
async fn test_update_absent_budget_not_found() {
    let db = setup().await;
    let repo = BudgetRepository::new(db.clone());

    let err = repo
        .update_amount(Uuid::now_v7(), dec!(100))
        .await
        .expect_err("Updating an absent budget should fail");

    assert!(matches!(err, BudgetError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_budget() {
    let db = setup().await;
    let user_id = create_user(&db, "grace").await;
    let repo = BudgetRepository::new(db.clone());

    let budget = repo
        .create(user_id, "Food", dec!(300))
        .await
        .expect("Failed to create budget");

    repo.delete(budget.id).await.expect("Failed to delete budget");

    let budgets = repo.list(user_id).await.expect("Failed to list budgets");
    assert!(budgets.is_empty());
}

#[tokio::test]
async fn test_delete_absent_budget_leaves_table_unchanged() {
    let db = setup().await;
    let user_id = create_user(&db, "heidi").await;
    let repo = BudgetRepository::new(db.clone());

    repo.create(user_id, "Food", dec!(300))
        .await
        .expect("Failed to create budget");

    let err = repo
        .delete(Uuid::now_v7())
        .await
        .expect_err("Deleting an absent budget should fail");
    assert!(matches!(err, BudgetError::NotFound(_)));

    let budgets = repo.list(user_id).await.expect("Failed to list budgets");
    assert_eq!(budgets.len(), 1);
}

#[tokio::test]
async fn test_vs_actual_unions_both_sides() {
    let db = setup().await;
    let user_id = create_user(&db, "ivan").await;
    let budgets = BudgetRepository::new(db.clone());
    let ledger = LedgerRepository::new(db.clone());
    let day = NaiveDate::from_ymd_opt(2024, 5, 10).expect("valid date");

    budgets
        .create(user_id, "Food", dec!(300))
        .await
        .expect("Failed to create budget");

    ledger
        .append(user_id, EntryKind::Expense, "Food", dec!(250), day)
        .await
        .expect("Failed to append expense");
    ledger
        .append(user_id, EntryKind::Expense, "Transport", dec!(80), day)
        .await
        .expect("Failed to append expense");

    let rows = budgets
        .vs_actual(user_id)
        .await
        .expect("Failed to compare budgets");

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].category, "Food");
    assert_eq!(rows[0].budgeted, dec!(300));
    assert_eq!(rows[0].spent, dec!(250));
    assert_eq!(rows[0].variance, dec!(50));

    // Spending without a budget still shows up, with budgeted = 0
    assert_eq!(rows[1].category, "Transport");
    assert_eq!(rows[1].budgeted, Decimal::ZERO);
    assert_eq!(rows[1].spent, dec!(80));
    assert_eq!(rows[1].variance, dec!(-80));
}

#[tokio::test]
async fn test_vs_actual_budget_without_spending() {
    let db = setup().await;
    let user_id = create_user(&db, "judy").await;
    let repo = BudgetRepository::new(db.clone());

    repo.create(user_id, "Entertainment", dec!(120))
        .await
        .expect("Failed to create budget");

    let rows = repo
        .vs_actual(user_id)
        .await
        .expect("Failed to compare budgets");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].spent, Decimal::ZERO);
    assert_eq!(rows[0].variance, dec!(120));
}
