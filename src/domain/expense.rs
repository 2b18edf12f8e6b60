//! Recorded spending.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Identifiable};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Spending categories an expense can be filed under.
pub enum ExpenseCategory {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Personal,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transportation,
        ExpenseCategory::Housing,
        ExpenseCategory::Utilities,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Shopping,
        ExpenseCategory::Education,
        ExpenseCategory::Personal,
        ExpenseCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Personal => "Personal",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        ExpenseCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown expense category `{}`", trimmed))
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: ExpenseCategory,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: description.into(),
            date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the populated fields of `patch` and refreshes `updated_at`.
    pub fn apply(&mut self, patch: ExpensePatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        self.updated_at = Utc::now();
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Partial update for an [`Expense`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub amount: Option<f64>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            "food".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Food
        );
        assert!("groceries".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn apply_patch_keeps_identity() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let mut expense = Expense::new(12.0, ExpenseCategory::Food, "Lunch", date);
        let id = expense.id;
        let created = expense.created_at;
        expense.apply(ExpensePatch {
            amount: Some(15.5),
            category: Some(ExpenseCategory::Entertainment),
            ..ExpensePatch::default()
        });
        assert_eq!(expense.id, id);
        assert_eq!(expense.created_at, created);
        assert_eq!(expense.amount, 15.5);
        assert_eq!(expense.category, ExpenseCategory::Entertainment);
        assert_eq!(expense.description, "Lunch");
        assert!(expense.updated_at >= created);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let expense = Expense::new(3.0, ExpenseCategory::Food, "Coffee", date);
        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["category"], "Food");
        assert_eq!(json["date"], "2024-04-02");
    }
}
