//! Database seeder for Saku development and testing.
//!
//! Seeds a demo user with several months of income and expenses, plus
//! budgets, assets, and debts, then rebuilds the cached period summaries.
//! Running it twice is safe: existing data is detected and skipped.
//!
//! Usage: cargo run --bin seeder

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use saku_core::auth::hash_password;
use saku_core::ledger::EntryKind;
use saku_db::{
    BudgetError, BudgetRepository, LedgerRepository, RefreshLocks, SummaryRepository,
    UserRepository,
};
use saku_shared::config::DatabaseConfig;

/// Username of the seeded account.
const DEMO_USERNAME: &str = "demo";
/// Password of the seeded account (printed so manual testers can log in).
const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let config = DatabaseConfig {
        url: database_url,
        max_connections: 5,
        min_connections: 1,
    };

    println!("Connecting to database...");
    let db = saku_db::connect(&config)
        .await
        .expect("Failed to connect to database");

    println!("Seeding demo user...");
    let user_id = seed_demo_user(&db).await;

    println!("Seeding ledger entries...");
    seed_ledger(&db, user_id).await;

    println!("Seeding budgets...");
    seed_budgets(&db, user_id).await;

    println!("Rebuilding period summaries...");
    refresh_summaries(&db, user_id).await;

    println!("Seeding complete!");
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Creates the demo user, or reuses it when it already exists.
async fn seed_demo_user(db: &DatabaseConnection) -> Uuid {
    let repo = UserRepository::new(db.clone());

    if let Ok(Some(existing)) = repo.find_by_username(DEMO_USERNAME).await {
        println!("  Demo user already exists, skipping...");
        return existing.id;
    }

    let hash = hash_password(DEMO_PASSWORD).expect("Failed to hash demo password");
    let user = repo
        .create(DEMO_USERNAME, &hash)
        .await
        .expect("Failed to create demo user");

    if let Err(e) = repo.update_savings_goal(user.id, dec!(5000)).await {
        eprintln!("Failed to set savings goal: {e}");
    }

    println!("  Created demo user: {DEMO_USERNAME} / {DEMO_PASSWORD}");
    user.id
}

/// Seeds income, expenses, assets, and debts across several months.
async fn seed_ledger(db: &DatabaseConnection, user_id: Uuid) {
    let ledger = LedgerRepository::new(db.clone());

    let already_seeded = ledger
        .list(user_id, EntryKind::Income)
        .await
        .is_ok_and(|rows| !rows.is_empty());
    if already_seeded {
        println!("  Ledger already seeded, skipping...");
        return;
    }

    let entries = [
        (EntryKind::Income, "Salary", dec!(3200), date(2025, 1, 25)),
        (EntryKind::Income, "Salary", dec!(3200), date(2025, 2, 25)),
        (EntryKind::Income, "Salary", dec!(3200), date(2025, 3, 25)),
        (EntryKind::Income, "Freelance", dec!(650), date(2025, 2, 14)),
        (EntryKind::Income, "Freelance", dec!(900), date(2025, 4, 2)),
        (EntryKind::Expense, "Rent", dec!(1100), date(2025, 1, 3)),
        (EntryKind::Expense, "Rent", dec!(1100), date(2025, 2, 3)),
        (EntryKind::Expense, "Rent", dec!(1100), date(2025, 3, 3)),
        (
            EntryKind::Expense,
            "Groceries",
            dec!(340.50),
            date(2025, 1, 18),
        ),
        (
            EntryKind::Expense,
            "Groceries",
            dec!(295.20),
            date(2025, 2, 16),
        ),
        (
            EntryKind::Expense,
            "Groceries",
            dec!(310.75),
            date(2025, 3, 19),
        ),
        (
            EntryKind::Expense,
            "Transport",
            dec!(92.40),
            date(2025, 1, 9),
        ),
        (
            EntryKind::Expense,
            "Transport",
            dec!(101.10),
            date(2025, 3, 11),
        ),
        (
            EntryKind::Expense,
            "Entertainment",
            dec!(75),
            date(2025, 2, 22),
        ),
        (
            EntryKind::Asset,
            "Savings Account",
            dec!(7500),
            date(2024, 12, 31),
        ),
        (EntryKind::Asset, "Brokerage", dec!(3000), date(2025, 1, 15)),
        (EntryKind::Debt, "Student Loan", dec!(4200), date(2023, 9, 1)),
    ];

    let mut inserted = 0;
    for (kind, label, amount, entry_date) in entries {
        if let Err(e) = ledger.append(user_id, kind, label, amount, entry_date).await {
            eprintln!("Failed to insert {kind} entry {label}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} ledger entries");
}

/// Seeds per-category budget ceilings.
async fn seed_budgets(db: &DatabaseConnection, user_id: Uuid) {
    let repo = BudgetRepository::new(db.clone());

    let budgets = [
        ("Groceries", dec!(400)),
        ("Transport", dec!(150)),
        ("Entertainment", dec!(120)),
    ];

    let mut inserted = 0;
    for (category, amount) in budgets {
        match repo.create(user_id, category, amount).await {
            Ok(_) => inserted += 1,
            Err(BudgetError::DuplicateCategory(_)) => {}
            Err(e) => eprintln!("Failed to insert budget {category}: {e}"),
        }
    }

    println!("  Inserted {inserted} budgets");
}

/// Rebuilds the demo user's cached monthly summaries.
async fn refresh_summaries(db: &DatabaseConnection, user_id: Uuid) {
    let summaries = SummaryRepository::new(db.clone(), RefreshLocks::new());

    match summaries.refresh(user_id).await {
        Ok(rows) => println!("  Cached {} monthly summaries", rows.len()),
        Err(e) => eprintln!("Failed to refresh summaries: {e}"),
    }
}
