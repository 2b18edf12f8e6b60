mod common;

use chrono::Weekday;
use common::{date, memory_manager};
use finance_core::{
    core::services::{BudgetBook, BudgetService},
    domain::{Budget, BudgetCategory, BudgetPeriod, Expense, ExpenseCategory},
};

#[test]
fn food_daily_budget_reports_overspend() {
    let today = date(2024, 9, 4);
    let manager = memory_manager(today);
    manager.add_expense(Expense::new(50.0, ExpenseCategory::Food, "Dinner", today));
    manager.upsert_budget(Budget::new(ExpenseCategory::Food, BudgetPeriod::Daily, 40.0));

    let statuses = manager.budget_statuses();
    assert_eq!(statuses.len(), 1);
    let status = &statuses[0];
    assert_eq!(status.spent, 50.0);
    assert_eq!(status.remaining, 0.0);
    assert_eq!(status.percentage, 125.0);
    assert!(status.is_over_budget);
    assert!(!status.is_near_limit);
}

#[test]
fn remaining_never_negative_and_flags_exclusive() {
    let today = date(2024, 9, 4);
    let budgets: Vec<Budget> = [0.0, 10.0, 50.0, 62.5, 100.0, 1000.0]
        .into_iter()
        .map(|limit| Budget::new(BudgetCategory::Total, BudgetPeriod::Monthly, limit))
        .collect();
    let expenses = vec![
        Expense::new(30.0, ExpenseCategory::Food, "", date(2024, 9, 1)),
        Expense::new(20.0, ExpenseCategory::Housing, "", date(2024, 9, 30)),
    ];
    for status in BudgetService::statuses(&expenses, &budgets, today, Weekday::Sun) {
        assert!(status.remaining >= 0.0);
        assert_eq!(status.remaining, (status.limit - status.spent).max(0.0));
        assert!(status.percentage.is_finite());
        assert_eq!(status.is_over_budget, status.spent > status.limit);
        assert!(!(status.is_over_budget && status.is_near_limit));
    }
}

#[test]
fn boundary_percentages() {
    let today = date(2024, 9, 4);
    let expenses = vec![Expense::new(50.0, ExpenseCategory::Food, "", today)];
    let at_limit = Budget::new(ExpenseCategory::Food, BudgetPeriod::Daily, 50.0);
    let near = Budget::new(ExpenseCategory::Food, BudgetPeriod::Weekly, 62.5);
    let zero = Budget::new(ExpenseCategory::Food, BudgetPeriod::Monthly, 0.0);
    let statuses = BudgetService::statuses(&expenses, &[at_limit, near, zero], today, Weekday::Sun);

    assert_eq!(statuses[0].percentage, 100.0);
    assert!(!statuses[0].is_near_limit && !statuses[0].is_over_budget);

    assert_eq!(statuses[1].percentage, 80.0);
    assert!(statuses[1].is_near_limit);

    assert_eq!(statuses[2].percentage, 0.0);
    assert!(statuses[2].is_over_budget);
}

#[test]
fn category_budget_ignores_other_categories() {
    let today = date(2024, 9, 4);
    let expenses = vec![
        Expense::new(12.0, ExpenseCategory::Food, "", today),
        Expense::new(300.0, ExpenseCategory::Housing, "", today),
    ];
    let budget = Budget::new(ExpenseCategory::Food, BudgetPeriod::Monthly, 100.0);
    let status = BudgetService::status(&expenses, &budget, today, Weekday::Sun);
    assert_eq!(status.spent, 12.0);
}

#[test]
fn upsert_same_pair_keeps_collection_length() {
    let manager = memory_manager(date(2024, 9, 4));
    manager.upsert_budget(Budget::new(ExpenseCategory::Food, BudgetPeriod::Monthly, 200.0));
    manager.upsert_budget(Budget::new(BudgetCategory::Total, BudgetPeriod::Monthly, 900.0));
    assert_eq!(manager.budgets().len(), 2);

    manager.upsert_budget(Budget::new(ExpenseCategory::Food, BudgetPeriod::Monthly, 250.0));
    let budgets = manager.budgets();
    assert_eq!(budgets.len(), 2);
    let food = budgets
        .iter()
        .find(|budget| budget.category == BudgetCategory::Category(ExpenseCategory::Food))
        .expect("food budget");
    assert_eq!(food.limit, 250.0);
}

#[test]
fn duplicate_pairs_in_stored_list_collapse() {
    let book = BudgetBook::from_budgets(vec![
        Budget::new(ExpenseCategory::Shopping, BudgetPeriod::Weekly, 10.0),
        Budget::new(ExpenseCategory::Shopping, BudgetPeriod::Weekly, 30.0),
    ]);
    assert_eq!(book.len(), 1);
    assert_eq!(book.iter().next().map(|budget| budget.limit), Some(30.0));
}

#[test]
fn remove_budget_by_pair() {
    let manager = memory_manager(date(2024, 9, 4));
    manager.upsert_budget(Budget::new(ExpenseCategory::Food, BudgetPeriod::Monthly, 200.0));
    let key = (
        BudgetCategory::Category(ExpenseCategory::Food),
        BudgetPeriod::Monthly,
    );
    let removed = manager.remove_budget(&key).expect("budget removed");
    assert_eq!(removed.limit, 200.0);
    assert!(manager.budgets().is_empty());
    assert!(manager.remove_budget(&key).is_err());
}

#[test]
fn stored_budgets_keep_user_order() {
    let manager = memory_manager(date(2024, 9, 4));
    manager.upsert_budget(Budget::new(ExpenseCategory::Shopping, BudgetPeriod::Monthly, 150.0));
    manager.upsert_budget(Budget::new(ExpenseCategory::Food, BudgetPeriod::Weekly, 90.0));
    manager.upsert_budget(Budget::new(BudgetCategory::Total, BudgetPeriod::Monthly, 1200.0));
    manager.upsert_budget(Budget::new(ExpenseCategory::Shopping, BudgetPeriod::Monthly, 175.0));

    let labels: Vec<String> = manager
        .budgets()
        .iter()
        .map(|budget| format!("{}/{}", budget.category, budget.period))
        .collect();
    assert_eq!(labels, vec!["Shopping/monthly", "Food/weekly", "Total/monthly"]);
    assert_eq!(manager.budgets()[0].limit, 175.0);

    let status_labels: Vec<String> = manager
        .budget_statuses()
        .iter()
        .map(|status| format!("{}/{}", status.category, status.period))
        .collect();
    assert_eq!(status_labels, labels);

    manager
        .remove_budget(&(
            BudgetCategory::Category(ExpenseCategory::Food),
            BudgetPeriod::Weekly,
        ))
        .expect("food budget removed");
    let remaining: Vec<BudgetCategory> =
        manager.budgets().iter().map(|budget| budget.category).collect();
    assert_eq!(
        remaining,
        vec![
            BudgetCategory::Category(ExpenseCategory::Shopping),
            BudgetCategory::Total
        ]
    );
}
