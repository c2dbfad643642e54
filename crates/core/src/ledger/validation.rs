//! Business rule validation for ledger operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// Maximum accepted length for entry labels (source / category).
pub const MAX_LABEL_LEN: usize = 120;

/// Validation errors for ledger inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Entry amount is zero or negative.
    #[error("Amount must be positive")]
    NonPositiveAmount,

    /// Entry label is empty or whitespace-only.
    #[error("Label must not be blank")]
    BlankLabel,

    /// Entry label exceeds the maximum length.
    #[error("Label must be at most {MAX_LABEL_LEN} characters")]
    LabelTooLong,

    /// Savings goal is negative.
    #[error("Savings goal must not be negative")]
    NegativeGoal,
}

/// Validates an entry amount.
///
/// # Errors
///
/// Returns `EntryValidationError::NonPositiveAmount` unless `amount > 0`.
pub fn validate_amount(amount: Decimal) -> Result<(), EntryValidationError> {
    if amount <= Decimal::ZERO {
        return Err(EntryValidationError::NonPositiveAmount);
    }
    Ok(())
}

/// Validates an entry label, returning the trimmed form.
///
/// # Errors
///
/// Returns `EntryValidationError::BlankLabel` for empty/whitespace-only
/// labels and `EntryValidationError::LabelTooLong` past [`MAX_LABEL_LEN`]
/// characters.
pub fn validate_label(label: &str) -> Result<&str, EntryValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(EntryValidationError::BlankLabel);
    }
    if trimmed.chars().count() > MAX_LABEL_LEN {
        return Err(EntryValidationError::LabelTooLong);
    }
    Ok(trimmed)
}

/// Validates a full entry input, returning the trimmed label.
///
/// # Errors
///
/// Returns the first failing rule from [`validate_label`] or
/// [`validate_amount`].
pub fn validate_entry(label: &str, amount: Decimal) -> Result<&str, EntryValidationError> {
    let trimmed = validate_label(label)?;
    validate_amount(amount)?;
    Ok(trimmed)
}

/// Validates a savings goal value. Zero is legal (goal unset).
///
/// # Errors
///
/// Returns `EntryValidationError::NegativeGoal` if `goal < 0`.
pub fn validate_savings_goal(goal: Decimal) -> Result<(), EntryValidationError> {
    if goal < Decimal::ZERO {
        return Err(EntryValidationError::NegativeGoal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_amount_accepted() {
        assert!(validate_amount(dec!(0.01)).is_ok());
        assert!(validate_amount(dec!(1000)).is_ok());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert_eq!(
            validate_amount(Decimal::ZERO),
            Err(EntryValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        assert_eq!(
            validate_amount(dec!(-5)),
            Err(EntryValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_label_trimmed() {
        assert_eq!(validate_label("  Groceries  "), Ok("Groceries"));
    }

    #[test]
    fn test_blank_label_rejected() {
        assert_eq!(validate_label("   "), Err(EntryValidationError::BlankLabel));
    }

    #[test]
    fn test_overlong_label_rejected() {
        let long = "x".repeat(MAX_LABEL_LEN + 1);
        assert_eq!(
            validate_label(&long),
            Err(EntryValidationError::LabelTooLong)
        );
    }

    #[test]
    fn test_validate_entry_combines_rules() {
        assert_eq!(validate_entry(" Rent ", dec!(850)), Ok("Rent"));
        assert_eq!(
            validate_entry("Rent", Decimal::ZERO),
            Err(EntryValidationError::NonPositiveAmount)
        );
        assert_eq!(
            validate_entry("", dec!(850)),
            Err(EntryValidationError::BlankLabel)
        );
    }

    #[test]
    fn test_savings_goal_zero_is_legal() {
        assert!(validate_savings_goal(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_negative_savings_goal_rejected() {
        assert_eq!(
            validate_savings_goal(dec!(-0.01)),
            Err(EntryValidationError::NegativeGoal)
        );
    }
}
