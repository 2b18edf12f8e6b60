use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Identifiable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityCategory {
    Mortgage,
    AutoLoan,
    StudentLoan,
    CreditCard,
    PersonalLoan,
    Other,
}

impl LiabilityCategory {
    pub const ALL: [LiabilityCategory; 6] = [
        LiabilityCategory::Mortgage,
        LiabilityCategory::AutoLoan,
        LiabilityCategory::StudentLoan,
        LiabilityCategory::CreditCard,
        LiabilityCategory::PersonalLoan,
        LiabilityCategory::Other,
    ];
}

impl fmt::Display for LiabilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LiabilityCategory::Mortgage => "Mortgage",
            LiabilityCategory::AutoLoan => "Auto Loan",
            LiabilityCategory::StudentLoan => "Student Loan",
            LiabilityCategory::CreditCard => "Credit Card",
            LiabilityCategory::PersonalLoan => "Personal Loan",
            LiabilityCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A payment applied against a liability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Money owed. `interest_rate` is an annual percentage (`12.0` means 12%).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: Uuid,
    pub name: String,
    pub category: LiabilityCategory,
    pub current_balance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
}

impl Liability {
    pub fn new(
        name: impl Into<String>,
        category: LiabilityCategory,
        current_balance: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            current_balance,
            original_amount: Some(current_balance),
            interest_rate: None,
            minimum_payment: None,
            due_date: None,
            start_date,
            maturity_date: None,
            payment_history: Vec::new(),
        }
    }

    pub fn with_terms(mut self, annual_rate_percent: f64, minimum_payment: f64) -> Self {
        self.interest_rate = Some(annual_rate_percent);
        self.minimum_payment = Some(minimum_payment);
        self
    }

    /// Monthly interest rate as a fraction. A missing rate is treated as interest-free.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate.unwrap_or(0.0) / 100.0 / 12.0
    }
}

impl Identifiable for Liability {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Liability {
    fn amount(&self) -> f64 {
        self.current_balance
    }
}
