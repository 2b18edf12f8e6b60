//! Subscription cost normalization and billing advancement.

use chrono::{Duration, NaiveDate};

use crate::domain::{BillingRecord, BillingStatus, Expense, Subscription};

pub struct SubscriptionService;

impl SubscriptionService {
    /// Cost of the subscription expressed per month.
    pub fn monthly_cost(subscription: &Subscription) -> f64 {
        subscription.amount * subscription.frequency.per_year() / 12.0
    }

    pub fn total_monthly_cost(subscriptions: &[Subscription]) -> f64 {
        subscriptions
            .iter()
            .filter(|subscription| subscription.is_active)
            .map(Self::monthly_cost)
            .sum()
    }

    /// Active subscriptions billing within `days` of `today`, soonest first.
    pub fn upcoming(subscriptions: &[Subscription], today: NaiveDate, days: i64) -> Vec<&Subscription> {
        let horizon = today + Duration::days(days);
        let mut upcoming: Vec<&Subscription> = subscriptions
            .iter()
            .filter(|subscription| subscription.is_active)
            .filter(|subscription| {
                subscription.next_billing >= today && subscription.next_billing <= horizon
            })
            .collect();
        upcoming.sort_by_key(|subscription| subscription.next_billing);
        upcoming
    }

    /// Bills every charge that has come due by `today`.
    ///
    /// Auto-generating subscriptions produce an expense per charge and a `billed` history entry;
    /// the others receive `pending` entries. Subscriptions whose next charge falls after their
    /// end date are deactivated.
    pub fn process_due(subscriptions: &mut [Subscription], today: NaiveDate) -> Vec<Expense> {
        let mut generated = Vec::new();
        for subscription in subscriptions.iter_mut() {
            if !subscription.is_active {
                continue;
            }
            while subscription.next_billing <= today {
                let due = subscription.next_billing;
                if subscription.ended_before(due) {
                    break;
                }
                let expense_id = if subscription.auto_generate {
                    let expense = Expense::new(
                        subscription.amount,
                        subscription.category,
                        subscription.name.clone(),
                        due,
                    );
                    let id = expense.id;
                    generated.push(expense);
                    Some(id)
                } else {
                    None
                };
                subscription.billing_history.push(BillingRecord {
                    date: due,
                    amount: subscription.amount,
                    expense_id,
                    status: if expense_id.is_some() {
                        BillingStatus::Billed
                    } else {
                        BillingStatus::Pending
                    },
                });
                subscription.last_billed = Some(due);
                subscription.next_billing = subscription.frequency.next_date(due);
            }
            if subscription.ended_before(subscription.next_billing) {
                subscription.is_active = false;
                tracing::info!(name = %subscription.name, "subscription ended");
            }
        }
        if !generated.is_empty() {
            tracing::info!(count = generated.len(), "generated subscription expenses");
        }
        generated
    }
}
