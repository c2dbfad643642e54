//! Property-based tests for the aggregation engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use chrono::{Datelike, NaiveDate};

use super::engine::{breakdown_by_category, summarize_periods};

/// Strategy for an entry date in 2020-2029.
fn entry_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..2030, 1u32..13, 1u32..29).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day).expect("day < 29 is valid in every month")
    })
}

/// Strategy for a non-negative amount (zero allowed: the engine is total).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a set of dated entries.
fn entries(max: usize) -> impl Strategy<Value = Vec<(NaiveDate, Decimal)>> {
    prop::collection::vec((entry_date(), amount()), 0..max)
}

/// Naive reference sum of one side for one (year, month) bucket.
fn month_sum(rows: &[(NaiveDate, Decimal)], year: i32, month: u32) -> Decimal {
    rows.iter()
        .filter(|(date, _)| date.year() == year && date.month() == month)
        .map(|(_, amount)| *amount)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Output is strictly ascending by (year, month) with no duplicates.
    #[test]
    fn prop_output_sorted_and_unique(
        incomes in entries(32),
        expenses in entries(32),
    ) {
        let periods = summarize_periods(&incomes, &expenses);
        let keys: Vec<(i32, u32)> = periods.iter().map(|p| (p.year, p.month)).collect();

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();

        prop_assert_eq!(keys, sorted);
    }

    /// Every input month appears in the output, and nothing else does.
    #[test]
    fn prop_outer_join_covers_exactly_input_months(
        incomes in entries(32),
        expenses in entries(32),
    ) {
        let periods = summarize_periods(&incomes, &expenses);

        let mut expected: Vec<(i32, u32)> = incomes
            .iter()
            .chain(expenses.iter())
            .map(|(date, _)| (date.year(), date.month()))
            .collect();
        expected.sort_unstable();
        expected.dedup();

        let got: Vec<(i32, u32)> = periods.iter().map(|p| (p.year, p.month)).collect();
        prop_assert_eq!(got, expected);
    }

    /// Each bucket's sums equal the naive per-month filter-sum of its side.
    #[test]
    fn prop_bucket_sums_match_inputs(
        incomes in entries(32),
        expenses in entries(32),
    ) {
        let periods = summarize_periods(&incomes, &expenses);

        for period in &periods {
            prop_assert_eq!(
                period.total_income,
                month_sum(&incomes, period.year, period.month)
            );
            prop_assert_eq!(
                period.total_expenses,
                month_sum(&expenses, period.year, period.month)
            );
        }
    }

    /// The engine is a pure function: same input, same output.
    #[test]
    fn prop_deterministic(
        incomes in entries(16),
        expenses in entries(16),
    ) {
        let first = summarize_periods(&incomes, &expenses);
        let second = summarize_periods(&incomes, &expenses);
        prop_assert_eq!(first, second);
    }

    /// Breakdown totals sum to the grand total and come out sorted.
    #[test]
    fn prop_breakdown_conserves_total(
        rows in prop::collection::vec(("[A-Z][a-z]{0,8}", amount()), 0..32),
    ) {
        let grand_total: Decimal = rows.iter().map(|(_, amount)| *amount).sum();

        let breakdown = breakdown_by_category(rows);

        let breakdown_total: Decimal = breakdown.iter().map(|c| c.total).sum();
        prop_assert_eq!(breakdown_total, grand_total);

        let categories: Vec<&str> =
            breakdown.iter().map(|c| c.category.as_str()).collect();
        let mut sorted = categories.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(categories, sorted);
    }
}
