mod common;

use common::{date, memory_manager};
use finance_core::{
    core::services::{LoanService, DEFAULT_MAX_MONTHS},
    domain::{Liability, LiabilityCategory},
    FinanceError, ProjectionError,
};

fn loan(balance: f64, rate: f64, payment: f64) -> Liability {
    Liability::new("Loan", LiabilityCategory::AutoLoan, balance, date(2023, 1, 1))
        .with_terms(rate, payment)
}

#[test]
fn schedule_balances_each_month() {
    let projection = LoanService::project_payoff(
        &loan(1200.0, 12.0, 100.0),
        date(2024, 1, 1),
        &[],
        DEFAULT_MAX_MONTHS,
    )
    .expect("loan amortizes");

    assert!(projection.months_remaining > 0 && projection.months_remaining < 24);
    assert_eq!(
        projection.monthly_breakdown.len() as u32,
        projection.months_remaining
    );
    let mut previous_balance = 1200.0;
    for (index, month) in projection.monthly_breakdown.iter().enumerate() {
        assert_eq!(month.month as usize, index + 1);
        assert!((month.payment - (month.interest + month.principal)).abs() < 1e-9);
        assert!(month.remaining_balance < previous_balance);
        previous_balance = month.remaining_balance;
    }
    let total: f64 = projection
        .monthly_breakdown
        .iter()
        .map(|month| month.interest)
        .sum();
    assert!((total - projection.total_interest_remaining).abs() < 1e-9);
}

#[test]
fn non_amortizing_loan_is_reported_not_looped() {
    let result = LoanService::project_payoff(
        &loan(10_000.0, 24.0, 150.0),
        date(2024, 1, 1),
        &[50.0],
        DEFAULT_MAX_MONTHS,
    );
    match result {
        Err(ProjectionError::NonAmortizing { payment, interest }) => {
            assert_eq!(payment, 150.0);
            assert!((interest - 200.0).abs() < 1e-9);
        }
        other => panic!("expected non-amortizing error, got {other:?}"),
    }
}

#[test]
fn manager_uses_configured_scenarios() {
    let today = date(2024, 3, 10);
    let manager = memory_manager(today);
    let mortgage = loan(20_000.0, 6.0, 400.0);
    let id = mortgage.id;
    manager.save_liabilities(&[mortgage]);

    let projection = manager.project_liability(id).expect("projection");
    assert_eq!(projection.liability_id, id);
    let extras: Vec<f64> = projection
        .extra_payment_scenarios
        .iter()
        .map(|scenario| scenario.extra_amount)
        .collect();
    assert_eq!(extras, manager.config().extra_payment_scenarios);
    assert!(projection
        .extra_payment_scenarios
        .windows(2)
        .all(|pair| pair[1].months_saved >= pair[0].months_saved));
    assert!(projection.payoff_date > today);
}

#[test]
fn manager_wraps_projection_errors() {
    let manager = memory_manager(date(2024, 3, 10));
    let mut card = loan(900.0, 20.0, 0.0);
    card.minimum_payment = None;
    let id = card.id;
    manager.save_liabilities(&[card]);
    match manager.project_liability(id) {
        Err(FinanceError::Projection(ProjectionError::MissingPayment)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}
