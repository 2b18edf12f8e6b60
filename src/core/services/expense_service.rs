use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{
    core::errors::{FinanceError, Result},
    domain::{
        common::{position_by_id, sum_amounts},
        DateWindow, Expense, ExpenseCategory, ExpensePatch,
    },
};

pub struct ExpenseService;

impl ExpenseService {
    pub fn add(expenses: &mut Vec<Expense>, expense: Expense) -> Uuid {
        let id = expense.id;
        tracing::debug!(%id, amount = expense.amount, category = %expense.category, "expense added");
        expenses.push(expense);
        id
    }

    pub fn update(expenses: &mut [Expense], id: Uuid, patch: ExpensePatch) -> Result<Expense> {
        let index = position_by_id(expenses, id).ok_or(FinanceError::ExpenseNotFound(id))?;
        let expense = &mut expenses[index];
        expense.apply(patch);
        Ok(expense.clone())
    }

    pub fn remove(expenses: &mut Vec<Expense>, id: Uuid) -> Result<Expense> {
        let index = position_by_id(expenses, id).ok_or(FinanceError::ExpenseNotFound(id))?;
        Ok(expenses.remove(index))
    }

    pub fn in_window<'a>(
        expenses: &'a [Expense],
        window: &'a DateWindow,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        expenses
            .iter()
            .filter(move |expense| window.contains(expense.date))
    }

    pub fn total_in_window(expenses: &[Expense], window: &DateWindow) -> f64 {
        sum_amounts(Self::in_window(expenses, window))
    }

    /// Spending per category inside `window`; categories without spending are omitted.
    pub fn category_breakdown(
        expenses: &[Expense],
        window: &DateWindow,
    ) -> BTreeMap<ExpenseCategory, f64> {
        let mut breakdown = BTreeMap::new();
        for expense in Self::in_window(expenses, window) {
            *breakdown.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        breakdown
    }
}
