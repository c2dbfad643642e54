//! Ledger entry kinds.

use serde::{Deserialize, Serialize};

/// The four kinds of ledger entry a user can record.
///
/// Income and expense entries carry a date and feed the monthly aggregation;
/// assets and debts are point-in-time valuations feeding net worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Money received (salary, side income, ...).
    Income,
    /// Money spent, labeled with a category.
    Expense,
    /// Something owned, valued at recording time.
    Asset,
    /// Something owed.
    Debt,
}

impl EntryKind {
    /// The capitalized noun used in user-facing messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
            Self::Asset => "Asset",
            Self::Debt => "Debt",
        }
    }

    /// The name of the free-text label field for this kind.
    ///
    /// Income entries label their `source`; the other kinds use `category`.
    #[must_use]
    pub const fn label_field(self) -> &'static str {
        match self {
            Self::Income => "source",
            Self::Expense | Self::Asset | Self::Debt => "category",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_capitalized_noun() {
        assert_eq!(EntryKind::Income.to_string(), "Income");
        assert_eq!(EntryKind::Expense.to_string(), "Expense");
        assert_eq!(EntryKind::Asset.to_string(), "Asset");
        assert_eq!(EntryKind::Debt.to_string(), "Debt");
    }

    #[test]
    fn test_label_field_names() {
        assert_eq!(EntryKind::Income.label_field(), "source");
        assert_eq!(EntryKind::Expense.label_field(), "category");
        assert_eq!(EntryKind::Asset.label_field(), "category");
        assert_eq!(EntryKind::Debt.label_field(), "category");
    }
}
