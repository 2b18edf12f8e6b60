pub mod budget_service;
pub mod expense_service;
pub mod loan_service;
pub mod net_worth_service;
pub mod subscription_service;

pub use budget_service::{BudgetBook, BudgetService};
pub use expense_service::ExpenseService;
pub use loan_service::{AmortizationRun, LoanService, DEFAULT_MAX_MONTHS};
pub use net_worth_service::{NetWorthService, SnapshotHistory};
pub use subscription_service::SubscriptionService;
