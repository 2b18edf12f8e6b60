//! Finance domain models: plain, serde-friendly records with no I/O.

pub mod asset;
pub mod budget;
pub mod common;
pub mod expense;
pub mod liability;
pub mod loan;
pub mod net_worth;
pub mod period;
pub mod subscription;

pub use asset::{Asset, AssetCategory, ValuationEntry};
pub use budget::{Budget, BudgetCategory, BudgetKey, BudgetPeriod, BudgetStatus};
pub use common::{Amounted, Identifiable};
pub use expense::{Expense, ExpenseCategory, ExpensePatch};
pub use liability::{Liability, LiabilityCategory, PaymentRecord};
pub use loan::{ExtraPaymentScenario, LoanPayoffProjection, MonthlyBreakdown};
pub use net_worth::{MonthlyChange, NetWorthSnapshot};
pub use period::DateWindow;
pub use subscription::{BillingFrequency, BillingRecord, BillingStatus, Subscription};
