//! Property-based tests for ledger input validation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::validation::{
    EntryValidationError, MAX_LABEL_LEN, validate_amount, validate_entry, validate_label,
    validate_savings_goal,
};

/// Strategy to generate a valid positive amount (> 0).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    // Amounts from 0.01 to 1,000,000.00
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate a non-blank label within the length limit.
fn valid_label() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 _-]{0,100}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("label must stay non-empty after trim", |s| !s.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any strictly positive amount passes validation.
    #[test]
    fn prop_positive_amount_accepted(amount in positive_amount()) {
        prop_assert!(validate_amount(amount).is_ok());
    }

    /// Any zero or negative amount is rejected.
    #[test]
    fn prop_non_positive_amount_rejected(amount in non_positive_amount()) {
        prop_assert_eq!(
            validate_amount(amount),
            Err(EntryValidationError::NonPositiveAmount)
        );
    }

    /// Any non-blank label within the limit passes, and comes back trimmed.
    #[test]
    fn prop_valid_label_accepted(label in valid_label(), pad in 0usize..4) {
        let padded = format!("{}{}{}", " ".repeat(pad), label, " ".repeat(pad));
        prop_assert_eq!(validate_label(&padded), Ok(label.as_str()));
    }

    /// Whitespace-only labels are rejected however long they are.
    #[test]
    fn prop_whitespace_label_rejected(len in 0usize..32) {
        let blank = " ".repeat(len);
        prop_assert_eq!(
            validate_label(&blank),
            Err(EntryValidationError::BlankLabel)
        );
    }

    /// Labels past the maximum length are rejected.
    #[test]
    fn prop_overlong_label_rejected(extra in 1usize..64) {
        let long = "x".repeat(MAX_LABEL_LEN + extra);
        prop_assert_eq!(
            validate_label(&long),
            Err(EntryValidationError::LabelTooLong)
        );
    }

    /// A valid label with a valid amount passes the combined check.
    #[test]
    fn prop_valid_entry_accepted(label in valid_label(), amount in positive_amount()) {
        prop_assert_eq!(validate_entry(&label, amount), Ok(label.as_str()));
    }

    /// Non-negative savings goals pass, negative ones never do.
    #[test]
    fn prop_savings_goal_sign_rule(cents in -100_000_000i64..100_000_000i64) {
        let goal = Decimal::new(cents, 2);
        if cents < 0 {
            prop_assert_eq!(
                validate_savings_goal(goal),
                Err(EntryValidationError::NegativeGoal)
            );
        } else {
            prop_assert!(validate_savings_goal(goal).is_ok());
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::super::validation::validate_amount;
    use rust_decimal::Decimal;

    /// Smallest representable positive amount at two decimal places.
    #[test]
    fn test_one_cent_accepted() {
        assert!(validate_amount(Decimal::new(1, 2)).is_ok());
    }
}
