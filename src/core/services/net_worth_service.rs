//! Net worth aggregation and snapshot history management.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{
    common::sum_amounts, Asset, AssetCategory, Liability, LiabilityCategory, MonthlyChange,
    NetWorthSnapshot,
};

pub struct NetWorthService;

impl NetWorthService {
    /// Point-in-time totals from current asset values and liability balances.
    pub fn compute_snapshot(
        assets: &[Asset],
        liabilities: &[Liability],
        date: NaiveDate,
    ) -> NetWorthSnapshot {
        let total_assets = sum_amounts(assets);
        let total_liabilities = sum_amounts(liabilities);

        let mut asset_breakdown: BTreeMap<AssetCategory, f64> =
            AssetCategory::ALL.iter().map(|category| (*category, 0.0)).collect();
        for asset in assets {
            *asset_breakdown.entry(asset.category).or_insert(0.0) += asset.current_value;
        }

        let mut liability_breakdown: BTreeMap<LiabilityCategory, f64> = LiabilityCategory::ALL
            .iter()
            .map(|category| (*category, 0.0))
            .collect();
        for liability in liabilities {
            *liability_breakdown.entry(liability.category).or_insert(0.0) +=
                liability.current_balance;
        }

        let snapshot = NetWorthSnapshot {
            date,
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
            asset_breakdown,
            liability_breakdown,
            monthly_change: None,
        };
        tracing::debug!(
            %date,
            assets = snapshot.total_assets,
            liabilities = snapshot.total_liabilities,
            net_worth = snapshot.net_worth,
            "net worth computed"
        );
        snapshot
    }

    /// Change from `prev` to `curr`. The percentage is relative to the magnitude of the
    /// previous net worth and is zero when that net worth is zero.
    pub fn diff_snapshots(prev: &NetWorthSnapshot, curr: &NetWorthSnapshot) -> MonthlyChange {
        let net_worth = curr.net_worth - prev.net_worth;
        let percentage = if prev.net_worth == 0.0 {
            0.0
        } else {
            net_worth / prev.net_worth.abs() * 100.0
        };
        MonthlyChange {
            assets: curr.total_assets - prev.total_assets,
            liabilities: curr.total_liabilities - prev.total_liabilities,
            net_worth,
            percentage,
        }
    }

    /// Copies of `history` (ascending) with `monthly_change` derived from each predecessor.
    pub fn with_changes(history: &[NetWorthSnapshot]) -> Vec<NetWorthSnapshot> {
        let mut previous: Option<&NetWorthSnapshot> = None;
        history
            .iter()
            .map(|snapshot| {
                let mut derived = snapshot.clone();
                derived.monthly_change = previous.map(|prev| Self::diff_snapshots(prev, snapshot));
                previous = Some(snapshot);
                derived
            })
            .collect()
    }
}

/// Snapshot history keyed by date: one snapshot per day, always ascending.
#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    entries: BTreeMap<NaiveDate, NetWorthSnapshot>,
}

impl SnapshotHistory {
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = NetWorthSnapshot>) -> Self {
        let mut history = Self::default();
        for snapshot in snapshots {
            history.upsert(snapshot);
        }
        history
    }

    /// Stores `snapshot`, replacing any snapshot already recorded for its date.
    /// Derived change data is dropped before storing.
    pub fn upsert(&mut self, mut snapshot: NetWorthSnapshot) -> Option<NetWorthSnapshot> {
        snapshot.monthly_change = None;
        self.entries.insert(snapshot.date, snapshot)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&NetWorthSnapshot> {
        self.entries.get(&date)
    }

    /// Latest snapshot strictly before `date`.
    pub fn previous(&self, date: NaiveDate) -> Option<&NetWorthSnapshot> {
        self.entries.range(..date).next_back().map(|(_, snapshot)| snapshot)
    }

    pub fn latest(&self) -> Option<&NetWorthSnapshot> {
        self.entries.values().next_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<NetWorthSnapshot> {
        self.entries.into_values().collect()
    }
}
