//! Budget definitions and their derived status.

use std::{fmt, str::FromStr};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    expense::{Expense, ExpenseCategory},
    period::DateWindow,
};

/// Percentage of the limit at which a budget is considered close to exhausted.
pub const NEAR_LIMIT_PERCENT: f64 = 80.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
/// Window over which a budget's spending is measured.
pub enum BudgetPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl BudgetPeriod {
    /// Calendar window of this period that contains `reference`.
    pub fn window_containing(self, reference: NaiveDate, week_start: Weekday) -> DateWindow {
        match self {
            BudgetPeriod::Daily => DateWindow::day(reference),
            BudgetPeriod::Weekly => DateWindow::week_containing(reference, week_start),
            BudgetPeriod::Monthly => DateWindow::month_containing(reference),
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Daily => "daily",
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(BudgetPeriod::Daily),
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            other => Err(format!("unknown budget period `{}`", other)),
        }
    }
}

/// Either a single expense category or the `Total` sentinel covering all spending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BudgetCategory {
    Total,
    Category(ExpenseCategory),
}

impl BudgetCategory {
    pub fn matches(self, category: ExpenseCategory) -> bool {
        match self {
            BudgetCategory::Total => true,
            BudgetCategory::Category(own) => own == category,
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetCategory::Total => f.write_str("Total"),
            BudgetCategory::Category(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for BudgetCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("total") {
            Ok(BudgetCategory::Total)
        } else {
            value.parse().map(BudgetCategory::Category)
        }
    }
}

impl TryFrom<String> for BudgetCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BudgetCategory> for String {
    fn from(value: BudgetCategory) -> Self {
        value.to_string()
    }
}

impl From<ExpenseCategory> for BudgetCategory {
    fn from(value: ExpenseCategory) -> Self {
        BudgetCategory::Category(value)
    }
}

/// A spending limit for a category over a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: Uuid,
    pub category: BudgetCategory,
    pub period: BudgetPeriod,
    pub limit: f64,
}

impl Budget {
    pub fn new(category: impl Into<BudgetCategory>, period: BudgetPeriod, limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            period,
            limit,
        }
    }

    /// Logical identity used for upserts.
    pub fn key(&self) -> BudgetKey {
        (self.category, self.period)
    }

    pub fn covers(&self, expense: &Expense, window: &DateWindow) -> bool {
        window.contains(expense.date) && self.category.matches(expense.category)
    }
}

pub type BudgetKey = (BudgetCategory, BudgetPeriod);

/// Spend-versus-limit figures for one budget in its current window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: BudgetCategory,
    pub period: BudgetPeriod,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
}

impl BudgetStatus {
    pub fn from_parts(budget: &Budget, spent: f64) -> Self {
        let limit = budget.limit;
        let remaining = (limit - spent).max(0.0);
        let percentage = if limit == 0.0 {
            0.0
        } else {
            spent / limit * 100.0
        };
        Self {
            category: budget.category,
            period: budget.period,
            limit,
            spent,
            remaining,
            percentage,
            is_over_budget: spent > limit,
            is_near_limit: (NEAR_LIMIT_PERCENT..100.0).contains(&percentage),
        }
    }
}
