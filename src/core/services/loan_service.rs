//! Amortization simulation for liabilities.

use chrono::NaiveDate;

use crate::{
    core::errors::ProjectionError,
    domain::{
        period::shift_month, ExtraPaymentScenario, Liability, LoanPayoffProjection,
        MonthlyBreakdown,
    },
};

/// Simulation cap used when the caller does not configure one (100 years).
pub const DEFAULT_MAX_MONTHS: u32 = 1200;

/// Balances below this are treated as settled.
const SETTLED_EPSILON: f64 = 0.005;

/// Outcome of a single amortization run.
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationRun {
    pub months: u32,
    pub total_interest: f64,
    pub schedule: Vec<MonthlyBreakdown>,
}

pub struct LoanService;

impl LoanService {
    /// Projects the liability to payoff at its minimum payment, plus each positive extra amount.
    pub fn project_payoff(
        liability: &Liability,
        start: NaiveDate,
        extra_amounts: &[f64],
        max_months: u32,
    ) -> Result<LoanPayoffProjection, ProjectionError> {
        let payment = liability
            .minimum_payment
            .filter(|payment| *payment > 0.0)
            .ok_or(ProjectionError::MissingPayment)?;
        let rate = liability.monthly_rate();
        let baseline = Self::amortize(liability.current_balance, rate, payment, max_months)?;

        let mut scenarios = Vec::new();
        for &extra in extra_amounts {
            if extra <= 0.0 {
                tracing::debug!(extra, "skipping non-positive extra payment");
                continue;
            }
            let run = Self::amortize(liability.current_balance, rate, payment + extra, max_months)?;
            scenarios.push(ExtraPaymentScenario {
                extra_amount: extra,
                months_saved: baseline.months.saturating_sub(run.months),
                interest_saved: (baseline.total_interest - run.total_interest).max(0.0),
            });
        }

        tracing::debug!(
            liability = %liability.id,
            months = baseline.months,
            interest = baseline.total_interest,
            scenarios = scenarios.len(),
            "loan payoff projected"
        );

        Ok(LoanPayoffProjection {
            liability_id: liability.id,
            months_remaining: baseline.months,
            total_interest_remaining: baseline.total_interest,
            payoff_date: shift_month(start, baseline.months as i32),
            monthly_breakdown: baseline.schedule,
            extra_payment_scenarios: scenarios,
        })
    }

    /// Runs the month-by-month schedule for `balance` at `monthly_rate` paying `payment`.
    ///
    /// Fails fast when the first month's interest consumes the payment (to within half a
    /// cent); the balance could then never decrease.
    pub fn amortize(
        balance: f64,
        monthly_rate: f64,
        payment: f64,
        max_months: u32,
    ) -> Result<AmortizationRun, ProjectionError> {
        let mut remaining = balance;
        let mut schedule = Vec::new();
        let mut total_interest = 0.0;

        if remaining <= SETTLED_EPSILON {
            return Ok(AmortizationRun {
                months: 0,
                total_interest,
                schedule,
            });
        }

        let first_interest = remaining * monthly_rate;
        if payment - first_interest <= SETTLED_EPSILON {
            return Err(ProjectionError::NonAmortizing {
                payment,
                interest: first_interest,
            });
        }

        while remaining > SETTLED_EPSILON {
            if schedule.len() as u32 >= max_months {
                return Err(ProjectionError::ExceedsHorizon { max_months });
            }
            let interest = remaining * monthly_rate;
            let paid = payment.min(remaining + interest);
            let principal = paid - interest;
            remaining -= principal;
            if remaining <= SETTLED_EPSILON {
                remaining = 0.0;
            }
            total_interest += interest;
            schedule.push(MonthlyBreakdown {
                month: schedule.len() as u32 + 1,
                payment: paid,
                principal,
                interest,
                remaining_balance: remaining,
            });
        }

        Ok(AmortizationRun {
            months: schedule.len() as u32,
            total_interest,
            schedule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LiabilityCategory;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn loan(balance: f64, rate: f64, payment: f64) -> Liability {
        Liability::new("Loan", LiabilityCategory::PersonalLoan, balance, start())
            .with_terms(rate, payment)
    }

    #[test]
    fn twelve_percent_loan_terminates_with_consistent_months() {
        let projection =
            LoanService::project_payoff(&loan(1200.0, 12.0, 100.0), start(), &[], DEFAULT_MAX_MONTHS)
                .expect("amortizing loan");
        assert_eq!(projection.months_remaining, 13);
        let (last, rest) = projection.monthly_breakdown.split_last().unwrap();
        for month in rest {
            assert!((month.interest + month.principal - 100.0).abs() < 1e-9);
            assert_eq!(month.payment, 100.0);
        }
        assert!(last.payment < 100.0);
        assert_eq!(last.remaining_balance, 0.0);
        assert_eq!(
            projection.payoff_date,
            NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
        );
    }

    #[test]
    fn payment_equal_to_interest_is_non_amortizing() {
        let err = LoanService::project_payoff(&loan(1200.0, 12.0, 12.0), start(), &[], 600)
            .expect_err("payment only covers interest");
        match err {
            ProjectionError::NonAmortizing { payment, interest } => {
                assert_eq!(payment, 12.0);
                assert!((interest - 12.0).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let below = LoanService::project_payoff(&loan(1200.0, 12.0, 5.0), start(), &[], 600);
        assert!(matches!(below, Err(ProjectionError::NonAmortizing { .. })));
    }

    #[test]
    fn sub_cent_principal_is_non_amortizing_with_accurate_message() {
        let err = LoanService::project_payoff(&loan(1200.0, 12.0, 12.003), start(), &[], 600)
            .expect_err("payment barely above interest");
        assert!(matches!(
            err,
            ProjectionError::NonAmortizing { payment, .. } if payment == 12.003
        ));
        let message = err.to_string();
        assert!(message.contains("payment of 12.003"));
        assert!(message.contains("less than half a cent of principal"));
        assert!(message.contains("monthly interest of 12.000"));
    }

    #[test]
    fn missing_payment_is_reported() {
        let liability = Liability::new("Card", LiabilityCategory::CreditCard, 500.0, start());
        let err = LoanService::project_payoff(&liability, start(), &[], 600).unwrap_err();
        assert_eq!(err, ProjectionError::MissingPayment);
    }

    #[test]
    fn settled_balance_projects_zero_months() {
        let projection =
            LoanService::project_payoff(&loan(0.0, 5.0, 50.0), start(), &[25.0], 600).unwrap();
        assert_eq!(projection.months_remaining, 0);
        assert!(projection.monthly_breakdown.is_empty());
        assert_eq!(projection.payoff_date, start());
        assert_eq!(projection.extra_payment_scenarios[0].months_saved, 0);
    }

    #[test]
    fn horizon_cap_is_enforced() {
        let err = LoanService::amortize(100_000.0, 0.0, 1.0, 120).unwrap_err();
        assert_eq!(err, ProjectionError::ExceedsHorizon { max_months: 120 });
    }

    #[test]
    fn extra_payments_save_time_and_interest() {
        let projection = LoanService::project_payoff(
            &loan(5000.0, 18.0, 150.0),
            start(),
            &[0.0, 50.0, 100.0],
            DEFAULT_MAX_MONTHS,
        )
        .unwrap();
        let scenarios = &projection.extra_payment_scenarios;
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].extra_amount, 50.0);
        assert!(scenarios[0].months_saved > 0);
        assert!(scenarios[1].months_saved > scenarios[0].months_saved);
        assert!(scenarios[1].interest_saved > scenarios[0].interest_saved);
    }

    #[test]
    fn interest_free_loan_divides_evenly() {
        let run = LoanService::amortize(300.0, 0.0, 100.0, 12).unwrap();
        assert_eq!(run.months, 3);
        assert_eq!(run.total_interest, 0.0);
    }
}
