//! Loan payoff projection results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One simulated month of an amortization schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBreakdown {
    /// 1-based month index.
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// Savings from paying a fixed extra amount every month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentScenario {
    pub extra_amount: f64,
    pub months_saved: u32,
    pub interest_saved: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayoffProjection {
    pub liability_id: Uuid,
    pub months_remaining: u32,
    pub total_interest_remaining: f64,
    pub payoff_date: NaiveDate,
    pub monthly_breakdown: Vec<MonthlyBreakdown>,
    pub extra_payment_scenarios: Vec<ExtraPaymentScenario>,
}
