//! Budget status calculation and budget collection upserts.

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use crate::domain::{
    common::sum_amounts, Budget, BudgetKey, BudgetStatus, DateWindow, Expense,
};

/// Stateless budgeting utilities that operate over expense and budget slices.
pub struct BudgetService;

impl BudgetService {
    /// Computes one status per budget, in input order, for the periods containing `reference`.
    pub fn statuses(
        expenses: &[Expense],
        budgets: &[Budget],
        reference: NaiveDate,
        week_start: Weekday,
    ) -> Vec<BudgetStatus> {
        budgets
            .iter()
            .map(|budget| Self::status(expenses, budget, reference, week_start))
            .collect()
    }

    pub fn status(
        expenses: &[Expense],
        budget: &Budget,
        reference: NaiveDate,
        week_start: Weekday,
    ) -> BudgetStatus {
        let window = budget.period.window_containing(reference, week_start);
        let spent = Self::spent_in_window(expenses, budget, &window);
        let status = BudgetStatus::from_parts(budget, spent);
        tracing::debug!(
            category = %budget.category,
            period = %budget.period,
            spent = status.spent,
            limit = status.limit,
            "budget status computed"
        );
        status
    }

    /// Sums expenses the budget covers inside `window`.
    pub fn spent_in_window(expenses: &[Expense], budget: &Budget, window: &DateWindow) -> f64 {
        sum_amounts(
            expenses
                .iter()
                .filter(|expense| budget.covers(expense, window)),
        )
    }

    /// Statuses that are over budget or close to their limit.
    pub fn alerts(statuses: &[BudgetStatus]) -> Vec<&BudgetStatus> {
        statuses
            .iter()
            .filter(|status| status.is_over_budget || status.is_near_limit)
            .collect()
    }
}

/// Budget collection with at most one budget per `(category, period)`, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct BudgetBook {
    entries: Vec<Budget>,
    index: HashMap<BudgetKey, usize>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from a persisted list; later duplicates of a pair win at the first slot.
    pub fn from_budgets(budgets: impl IntoIterator<Item = Budget>) -> Self {
        let mut book = Self::new();
        for budget in budgets {
            book.upsert(budget);
        }
        book
    }

    /// Overwrites the limit of the existing budget for the same pair in place, or appends
    /// `budget`. Returns the stored budget.
    pub fn upsert(&mut self, budget: Budget) -> &Budget {
        let key = budget.key();
        let slot = match self.index.get(&key) {
            Some(&slot) => {
                self.entries[slot].limit = budget.limit;
                tracing::debug!(category = %key.0, period = %key.1, "budget replaced");
                slot
            }
            None => {
                self.entries.push(budget);
                let slot = self.entries.len() - 1;
                self.index.insert(key, slot);
                slot
            }
        };
        &self.entries[slot]
    }

    pub fn remove(&mut self, key: &BudgetKey) -> Option<Budget> {
        let slot = self.index.remove(key)?;
        let removed = self.entries.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, key: &BudgetKey) -> Option<&Budget> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Budget> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Budget> {
        self.entries
    }
}
