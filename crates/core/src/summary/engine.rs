//! Period bucketing and category grouping.
//!
//! Pure functions: the repository layer feeds raw (date, amount) and
//! (category, amount) rows and persists or serves what comes back.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{CategorySpend, PeriodTotals};

/// Buckets income and expense entries by (year, month) and sums each side.
///
/// A full outer join across the two entry sets: a month present in only one
/// of them still produces a row, with zero on the missing side. Output is
/// ordered ascending by year, then month. Deterministic and total;
/// zero-amount entries contribute zero to their bucket.
#[must_use]
pub fn summarize_periods(
    incomes: &[(NaiveDate, Decimal)],
    expenses: &[(NaiveDate, Decimal)],
) -> Vec<PeriodTotals> {
    let mut buckets: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();

    for (date, amount) in incomes {
        let bucket = buckets.entry((date.year(), date.month())).or_default();
        bucket.0 += amount;
    }

    for (date, amount) in expenses {
        let bucket = buckets.entry((date.year(), date.month())).or_default();
        bucket.1 += amount;
    }

    buckets
        .into_iter()
        .map(|((year, month), (total_income, total_expenses))| PeriodTotals {
            year,
            month,
            total_income,
            total_expenses,
        })
        .collect()
}

/// Groups expense rows by category and sums each group.
///
/// Output is ordered ascending by category label. Duplicate labels merge by
/// summing.
#[must_use]
pub fn breakdown_by_category(rows: Vec<(String, Decimal)>) -> Vec<CategorySpend> {
    let mut groups: BTreeMap<String, Decimal> = BTreeMap::new();

    for (category, amount) in rows {
        *groups.entry(category).or_default() += amount;
    }

    groups
        .into_iter()
        .map(|(category, total)| CategorySpend { category, total })
        .collect()
}
