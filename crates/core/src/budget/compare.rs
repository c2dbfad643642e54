//! Joining budget ceilings against actual spending.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One category's budget ceiling joined with its actual spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetComparison {
    /// Category label.
    pub category: String,
    /// Budgeted ceiling for the category; 0 when only spend exists.
    pub budgeted: Decimal,
    /// Actual spend in the category; 0 when only a budget exists.
    pub spent: Decimal,
    /// `budgeted - spent`; negative means overspent.
    pub variance: Decimal,
}

/// Joins budget rows with per-category spend totals.
///
/// Union of both category sets, never an intersection: a category with
/// spend but no budget appears with `budgeted = 0`, and one with a budget
/// but no spend appears with `spent = 0`. Output is ordered ascending by
/// category label. Duplicate labels on either side merge by summing.
#[must_use]
pub fn compare_budgets(
    budgets: Vec<(String, Decimal)>,
    spent: Vec<(String, Decimal)>,
) -> Vec<BudgetComparison> {
    let mut joined: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

    for (category, amount) in budgets {
        joined.entry(category).or_default().0 += amount;
    }

    for (category, amount) in spent {
        joined.entry(category).or_default().1 += amount;
    }

    joined
        .into_iter()
        .map(|(category, (budgeted, spent))| BudgetComparison {
            category,
            budgeted,
            spent,
            variance: budgeted - spent,
        })
        .collect()
}
