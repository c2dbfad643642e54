//! Ledger entry domain rules.
//!
//! This module implements the core ledger functionality:
//! - Entry kinds (income, expense, asset, debt)
//! - Input validation for entry creation and the savings goal

pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use types::EntryKind;
pub use validation::{
    EntryValidationError, MAX_LABEL_LEN, validate_amount, validate_entry, validate_label,
    validate_savings_goal,
};
