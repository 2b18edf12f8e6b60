use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finance_core::{
    core::services::{BudgetService, LoanService, DEFAULT_MAX_MONTHS},
    domain::{
        Budget, BudgetCategory, BudgetPeriod, Expense, ExpenseCategory, Liability,
        LiabilityCategory,
    },
};

fn build_expenses(count: usize, start: NaiveDate) -> Vec<Expense> {
    (0..count)
        .map(|idx| {
            let category = ExpenseCategory::ALL[idx % ExpenseCategory::ALL.len()];
            let date = start + Duration::days((idx % 365) as i64);
            Expense::new(5.0 + (idx % 40) as f64, category, "bench", date)
        })
        .collect()
}

fn bench_loan_projection(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mortgage = Liability::new("Mortgage", LiabilityCategory::Mortgage, 350_000.0, start)
        .with_terms(6.5, 2_212.0);
    let extras = [50.0, 100.0, 200.0, 500.0];

    c.bench_function("mortgage_projection_30y", |b| {
        b.iter(|| {
            let projection =
                LoanService::project_payoff(&mortgage, start, black_box(&extras), DEFAULT_MAX_MONTHS)
                    .expect("mortgage amortizes");
            black_box(projection);
        })
    });
}

fn bench_budget_statuses(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let expenses = build_expenses(10_000, start);
    let mut budgets: Vec<Budget> = ExpenseCategory::ALL
        .into_iter()
        .map(|category| Budget::new(category, BudgetPeriod::Monthly, 400.0))
        .collect();
    budgets.push(Budget::new(BudgetCategory::Total, BudgetPeriod::Weekly, 900.0));

    c.bench_function("budget_statuses_10k", |b| {
        b.iter(|| {
            let statuses =
                BudgetService::statuses(black_box(&expenses), &budgets, today, chrono::Weekday::Sun);
            black_box(statuses);
        })
    });
}

criterion_group!(benches, bench_loan_projection, bench_budget_statuses);
criterion_main!(benches);
