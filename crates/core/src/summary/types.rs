//! Derived summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income/expense totals for one (year, month) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Calendar year of the bucket.
    pub year: i32,
    /// Calendar month of the bucket (1-12).
    pub month: u32,
    /// Sum of income amounts dated in this month.
    pub total_income: Decimal,
    /// Sum of expense amounts dated in this month.
    pub total_expenses: Decimal,
}

/// All-time income/expense totals for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all income amounts.
    pub total_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_savings: Decimal,
}

/// Total spend in one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// Expense category label.
    pub category: String,
    /// Sum of expense amounts in this category.
    pub total: Decimal,
}

/// The full financial summary read model.
///
/// Totals are exact sums; the two ratio fields are percentages rounded to
/// two decimal places, zero when their denominator is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of all income amounts.
    pub total_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_savings: Decimal,
    /// The user's configured savings goal.
    pub savings_goal: Decimal,
    /// Savings accumulated so far (equals `net_savings`).
    pub current_savings: Decimal,
    /// `current_savings / savings_goal * 100`, 0 when the goal is 0.
    pub savings_progress_percentage: Decimal,
    /// `total_expenses / total_income * 100`, 0 when income is 0.
    pub expense_to_income_ratio: Decimal,
}

/// Net worth read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorth {
    /// Sum of all asset values.
    pub total_assets: Decimal,
    /// Sum of all debt amounts.
    pub total_debts: Decimal,
    /// `total_assets - total_debts`.
    pub net_worth: Decimal,
}

/// Outcome of the 20%-rule savings check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsStatus {
    /// Current savings meet or exceed the recommended amount.
    #[serde(rename = "meeting goal")]
    MeetingGoal,
    /// Current savings fall short of the recommended amount.
    #[serde(rename = "insufficient savings")]
    InsufficientSavings,
}

impl SavingsStatus {
    /// The user-facing status string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MeetingGoal => "meeting goal",
            Self::InsufficientSavings => "insufficient savings",
        }
    }
}

impl std::fmt::Display for SavingsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Savings recommendation read model (the 20% rule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsRecommendation {
    /// Sum of all income amounts.
    pub total_income: Decimal,
    /// Sum of all expense amounts.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub current_savings: Decimal,
    /// `current_savings / total_income * 100`, 0 when income is 0.
    pub savings_rate: Decimal,
    /// 20% of total income, rounded to two decimal places.
    pub recommended_savings: Decimal,
    /// Whether current savings reach the recommended amount.
    pub status: SavingsStatus,
}

/// Financial health score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    /// Score below 50.
    Poor,
    /// Score in [50, 75).
    Fair,
    /// Score of 75 or above.
    Good,
}

impl HealthBand {
    /// The user-facing band name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
        }
    }
}

impl std::fmt::Display for HealthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial health score read model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScore {
    /// Savings rate as a percentage, rounded to two decimal places.
    pub score: Decimal,
    /// Band classification of the score.
    pub band: HealthBand,
}
