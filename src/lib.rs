#![doc(test(attr(deny(warnings))))]

//! Finance Core aggregates personal finance records into budget status, net worth, and loan
//! payoff projections, backed by a pluggable key-value persistence port.

pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

pub use crate::core::{Clock, FinanceError, FinanceManager, ProjectionError};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
