//! Services, clock abstraction, and the persistence-backed facade.

pub mod clock;
pub mod errors;
pub mod finance_manager;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{FinanceError, ProjectionError, Result};
pub use finance_manager::FinanceManager;
