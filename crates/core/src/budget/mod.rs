//! Budget-vs-actual comparison.

pub mod compare;

pub use compare::{BudgetComparison, compare_budgets};
