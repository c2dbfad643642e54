//! `SeaORM` entity definitions.

pub mod assets;
pub mod budgets;
pub mod debts;
pub mod expenses;
pub mod incomes;
pub mod period_summaries;
pub mod users;
