use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

/// Unified error type for the service and configuration layers.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Budget not found: {0}")]
    BudgetNotFound(String),
    #[error("Liability not found: {0}")]
    LiabilityNotFound(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

pub type Result<T> = StdResult<T, FinanceError>;

/// Reasons a loan cannot be projected to payoff.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("liability has no positive minimum payment")]
    MissingPayment,
    #[error(
        "payment of {payment:.3} leaves less than half a cent of principal after monthly interest of {interest:.3}; the loan does not amortize"
    )]
    NonAmortizing { payment: f64, interest: f64 },
    #[error("loan is not paid off within {max_months} months")]
    ExceedsHorizon { max_months: u32 },
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}
