//! Monthly aggregation and derived financial metrics.
//!
//! This module implements:
//! - Period bucketing of income/expense entries (the aggregation engine)
//! - Category breakdown of spending
//! - Derived read models: totals, financial summary, net worth, savings
//!   recommendation, financial health score

pub mod engine;
pub mod insight;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::{breakdown_by_category, summarize_periods};
pub use insight::{
    financial_summary, health_score, net_worth, ratio_percent, savings_recommendation, totals,
};
pub use types::{
    CategorySpend, FinancialSummary, HealthBand, HealthScore, NetWorth, PeriodTotals,
    SavingsRecommendation, SavingsStatus, Totals,
};
