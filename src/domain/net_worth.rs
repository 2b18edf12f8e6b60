//! Net worth snapshots.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{asset::AssetCategory, liability::LiabilityCategory};

/// Change between two consecutive snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChange {
    pub assets: f64,
    pub liabilities: f64,
    pub net_worth: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSnapshot {
    pub date: NaiveDate,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    #[serde(default)]
    pub asset_breakdown: BTreeMap<AssetCategory, f64>,
    #[serde(default)]
    pub liability_breakdown: BTreeMap<LiabilityCategory, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_change: Option<MonthlyChange>,
}
