//! Recurring charges and their billing history.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{expense::ExpenseCategory, period::shift_month};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingFrequency {
    /// Billing date following `from`.
    pub fn next_date(self, from: NaiveDate) -> NaiveDate {
        match self {
            BillingFrequency::Weekly => from + Duration::weeks(1),
            BillingFrequency::Monthly => shift_month(from, 1),
            BillingFrequency::Quarterly => shift_month(from, 3),
            BillingFrequency::Yearly => shift_month(from, 12),
        }
    }

    /// Number of charges per year.
    pub fn per_year(self) -> f64 {
        match self {
            BillingFrequency::Weekly => 52.0,
            BillingFrequency::Monthly => 12.0,
            BillingFrequency::Quarterly => 4.0,
            BillingFrequency::Yearly => 1.0,
        }
    }
}

impl fmt::Display for BillingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingFrequency::Weekly => "weekly",
            BillingFrequency::Monthly => "monthly",
            BillingFrequency::Quarterly => "quarterly",
            BillingFrequency::Yearly => "yearly",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    Pending,
    Billed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<Uuid>,
    pub status: BillingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub frequency: BillingFrequency,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub category: ExpenseCategory,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_billed: Option<NaiveDate>,
    pub next_billing: NaiveDate,
    #[serde(default)]
    pub auto_generate: bool,
    #[serde(default)]
    pub billing_history: Vec<BillingRecord>,
}

fn default_active() -> bool {
    true
}

impl Subscription {
    /// Creates an active subscription whose first charge falls on `start_date`.
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        frequency: BillingFrequency,
        category: ExpenseCategory,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            frequency,
            start_date,
            end_date: None,
            category,
            is_active: true,
            last_billed: None,
            next_billing: start_date,
            auto_generate: false,
            billing_history: Vec::new(),
        }
    }

    pub fn ended_before(&self, date: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| date > end)
    }
}

