use std::{collections::BTreeMap, sync::Arc};

use uuid::Uuid;

use crate::{
    config::Config,
    core::{
        clock::{Clock, SystemClock},
        errors::{FinanceError, Result},
        services::{
            BudgetBook, BudgetService, ExpenseService, LoanService, NetWorthService,
            SnapshotHistory, SubscriptionService,
        },
    },
    domain::{
        common::find_by_id,
        Asset, Budget, BudgetKey, BudgetStatus, DateWindow, Expense, ExpenseCategory,
        ExpensePatch, Liability, LoanPayoffProjection, NetWorthSnapshot, Subscription,
    },
    storage::{Persistence, StorageKey},
};

/// Facade that reads collections from persistence, runs the services, and writes back changes.
pub struct FinanceManager {
    persistence: Persistence,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl FinanceManager {
    pub fn new(persistence: Persistence, config: Config) -> Self {
        Self::with_clock(persistence, config, Arc::new(SystemClock))
    }

    pub fn with_clock(persistence: Persistence, config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            persistence,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.persistence.get(StorageKey::Expenses)
    }

    pub fn budgets(&self) -> Vec<Budget> {
        self.persistence.get(StorageKey::Budgets)
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.persistence.get(StorageKey::Assets)
    }

    pub fn liabilities(&self) -> Vec<Liability> {
        self.persistence.get(StorageKey::Liabilities)
    }

    pub fn subscriptions(&self) -> Vec<Subscription> {
        self.persistence.get(StorageKey::Subscriptions)
    }

    /// Persisted snapshots, ascending, with `monthly_change` derived from each predecessor.
    pub fn snapshot_history(&self) -> Vec<NetWorthSnapshot> {
        let stored: Vec<NetWorthSnapshot> = self.persistence.get(StorageKey::NetWorthHistory);
        let history = SnapshotHistory::from_snapshots(stored).into_vec();
        NetWorthService::with_changes(&history)
    }

    pub fn add_expense(&self, expense: Expense) -> Uuid {
        let mut expenses = self.expenses();
        let id = ExpenseService::add(&mut expenses, expense);
        self.persistence.save(StorageKey::Expenses, &expenses);
        id
    }

    pub fn update_expense(&self, id: Uuid, patch: ExpensePatch) -> Result<Expense> {
        let mut expenses = self.expenses();
        let updated = ExpenseService::update(&mut expenses, id, patch)?;
        self.persistence.save(StorageKey::Expenses, &expenses);
        Ok(updated)
    }

    pub fn delete_expense(&self, id: Uuid) -> Result<Expense> {
        let mut expenses = self.expenses();
        let removed = ExpenseService::remove(&mut expenses, id)?;
        self.persistence.save(StorageKey::Expenses, &expenses);
        Ok(removed)
    }

    /// Adds `budget`, replacing the limit of any budget already set for its category and period.
    pub fn upsert_budget(&self, budget: Budget) -> Budget {
        let mut book = BudgetBook::from_budgets(self.budgets());
        let stored = book.upsert(budget).clone();
        self.persistence.save(StorageKey::Budgets, &book.into_vec());
        stored
    }

    pub fn remove_budget(&self, key: &BudgetKey) -> Result<Budget> {
        let mut book = BudgetBook::from_budgets(self.budgets());
        let removed = book
            .remove(key)
            .ok_or_else(|| FinanceError::BudgetNotFound(format!("{} ({})", key.0, key.1)))?;
        self.persistence.save(StorageKey::Budgets, &book.into_vec());
        Ok(removed)
    }

    pub fn save_assets(&self, assets: &[Asset]) {
        self.persistence.save(StorageKey::Assets, assets);
    }

    pub fn save_liabilities(&self, liabilities: &[Liability]) {
        self.persistence.save(StorageKey::Liabilities, liabilities);
    }

    pub fn save_subscriptions(&self, subscriptions: &[Subscription]) {
        self.persistence.save(StorageKey::Subscriptions, subscriptions);
    }

    pub fn budget_statuses(&self) -> Vec<BudgetStatus> {
        BudgetService::statuses(
            &self.expenses(),
            &self.budgets(),
            self.clock.today(),
            self.config.week_start,
        )
    }

    pub fn category_breakdown_current_month(&self) -> BTreeMap<ExpenseCategory, f64> {
        let window = DateWindow::month_containing(self.clock.today());
        ExpenseService::category_breakdown(&self.expenses(), &window)
    }

    /// Current net worth, not persisted.
    pub fn net_worth(&self) -> NetWorthSnapshot {
        NetWorthService::compute_snapshot(&self.assets(), &self.liabilities(), self.clock.today())
    }

    /// Computes today's snapshot and stores it, replacing any snapshot already taken today.
    pub fn record_snapshot(&self) -> NetWorthSnapshot {
        let snapshot = self.net_worth();
        let stored: Vec<NetWorthSnapshot> = self.persistence.get(StorageKey::NetWorthHistory);
        let mut history = SnapshotHistory::from_snapshots(stored);
        if history.upsert(snapshot.clone()).is_some() {
            tracing::info!(date = %snapshot.date, "replaced existing net worth snapshot");
        }
        self.persistence
            .save(StorageKey::NetWorthHistory, &history.into_vec());
        snapshot
    }

    /// Projects the liability with the configured extra-payment scenarios.
    pub fn project_liability(&self, id: Uuid) -> Result<LoanPayoffProjection> {
        self.project_liability_with(id, &self.config.extra_payment_scenarios)
    }

    pub fn project_liability_with(&self, id: Uuid, extras: &[f64]) -> Result<LoanPayoffProjection> {
        let liabilities = self.liabilities();
        let liability = find_by_id(&liabilities, id)
            .ok_or_else(|| FinanceError::LiabilityNotFound(id.to_string()))?;
        let projection = LoanService::project_payoff(
            liability,
            self.clock.today(),
            extras,
            self.config.max_projection_months,
        )?;
        Ok(projection)
    }

    /// Bills due subscriptions and appends any generated expenses.
    pub fn process_subscriptions(&self) -> Vec<Expense> {
        let mut subscriptions = self.subscriptions();
        let generated = SubscriptionService::process_due(&mut subscriptions, self.clock.today());
        self.persistence
            .save(StorageKey::Subscriptions, &subscriptions);
        if !generated.is_empty() {
            let mut expenses = self.expenses();
            expenses.extend(generated.iter().cloned());
            self.persistence.save(StorageKey::Expenses, &expenses);
        }
        generated
    }
}
