//! Derived financial metrics.
//!
//! Every percentage in the crate goes through [`ratio_percent`] so that the
//! summary view, the recommendation, and the health score can never disagree
//! on rounding or zero handling.

use rust_decimal::Decimal;

use super::types::{
    FinancialSummary, HealthBand, HealthScore, NetWorth, SavingsRecommendation, SavingsStatus,
    Totals,
};

/// Share of income the savings recommendation targets (20%).
fn recommended_rate() -> Decimal {
    Decimal::new(20, 2)
}

/// `numerator / denominator * 100`, rounded to two decimal places.
///
/// Total function: returns 0 when the denominator is 0 instead of failing.
#[must_use]
pub fn ratio_percent(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    ((numerator / denominator) * Decimal::ONE_HUNDRED).round_dp(2)
}

/// Combines income/expense sums into the totals read model.
#[must_use]
pub fn totals(total_income: Decimal, total_expenses: Decimal) -> Totals {
    Totals {
        total_income,
        total_expenses,
        net_savings: total_income - total_expenses,
    }
}

/// Builds the financial summary read model.
///
/// A user with no ledger entries gets all-zero numerics (plus their goal),
/// never an error.
#[must_use]
pub fn financial_summary(
    total_income: Decimal,
    total_expenses: Decimal,
    savings_goal: Decimal,
) -> FinancialSummary {
    let net_savings = total_income - total_expenses;

    FinancialSummary {
        total_income,
        total_expenses,
        net_savings,
        savings_goal,
        current_savings: net_savings,
        savings_progress_percentage: ratio_percent(net_savings, savings_goal),
        expense_to_income_ratio: ratio_percent(total_expenses, total_income),
    }
}

/// Builds the net worth read model.
#[must_use]
pub fn net_worth(total_assets: Decimal, total_debts: Decimal) -> NetWorth {
    NetWorth {
        total_assets,
        total_debts,
        net_worth: total_assets - total_debts,
    }
}

/// Applies the 20% rule: recommended savings is a fifth of income, and the
/// status reports whether current savings reach it.
#[must_use]
pub fn savings_recommendation(
    total_income: Decimal,
    total_expenses: Decimal,
) -> SavingsRecommendation {
    let current_savings = total_income - total_expenses;
    let recommended_savings = (total_income * recommended_rate()).round_dp(2);

    let status = if current_savings >= recommended_savings {
        SavingsStatus::MeetingGoal
    } else {
        SavingsStatus::InsufficientSavings
    };

    SavingsRecommendation {
        total_income,
        total_expenses,
        current_savings,
        savings_rate: ratio_percent(current_savings, total_income),
        recommended_savings,
        status,
    }
}

/// Scores financial health as the savings rate, banded.
///
/// Bands: below 50 is poor, [50, 75) is fair, 75 and above is good. Zero
/// income scores 0 (poor).
#[must_use]
pub fn health_score(total_income: Decimal, total_expenses: Decimal) -> HealthScore {
    let score = ratio_percent(total_income - total_expenses, total_income);

    let band = if score < Decimal::new(50, 0) {
        HealthBand::Poor
    } else if score < Decimal::new(75, 0) {
        HealthBand::Fair
    } else {
        HealthBand::Good
    };

    HealthScore { score, band }
}
