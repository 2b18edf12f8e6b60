use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Amounted;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Cash,
    Investments,
    RealEstate,
    Vehicles,
    Retirement,
    Crypto,
    Other,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 7] = [
        AssetCategory::Cash,
        AssetCategory::Investments,
        AssetCategory::RealEstate,
        AssetCategory::Vehicles,
        AssetCategory::Retirement,
        AssetCategory::Crypto,
        AssetCategory::Other,
    ];
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetCategory::Cash => "Cash",
            AssetCategory::Investments => "Investments",
            AssetCategory::RealEstate => "Real Estate",
            AssetCategory::Vehicles => "Vehicles",
            AssetCategory::Retirement => "Retirement",
            AssetCategory::Crypto => "Crypto",
            AssetCategory::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A point-in-time valuation recorded for an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuationEntry {
    pub date: NaiveDate,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Something the user owns. Only `current_value` feeds net worth; the history is informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    pub category: AssetCategory,
    pub current_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    pub last_updated: DateTime<Utc>,
    #[serde(default = "default_tracked")]
    pub is_tracked: bool,
    #[serde(default)]
    pub valuation_history: Vec<ValuationEntry>,
}

fn default_tracked() -> bool {
    true
}

impl Asset {
    pub fn new(name: impl Into<String>, category: AssetCategory, current_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            current_value,
            purchase_price: None,
            purchase_date: None,
            last_updated: Utc::now(),
            is_tracked: true,
            valuation_history: Vec::new(),
        }
    }

    /// Records a new valuation and makes it the current value.
    pub fn revalue(&mut self, date: NaiveDate, value: f64, note: Option<String>) {
        self.valuation_history.push(ValuationEntry { date, value, note });
        self.current_value = value;
        self.last_updated = Utc::now();
    }
}

impl Amounted for Asset {
    fn amount(&self) -> f64 {
        self.current_value
    }
}
