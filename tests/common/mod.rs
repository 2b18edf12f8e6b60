#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use finance_core::{
    config::Config,
    core::FixedClock,
    storage::{JsonFileStorage, MemoryStorage, Persistence},
    FinanceManager,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates a unique directory that outlives the calling test.
pub fn temp_dir() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Manager over an in-memory store with the clock pinned to `today`.
pub fn memory_manager(today: NaiveDate) -> FinanceManager {
    FinanceManager::with_clock(
        Persistence::new(Arc::new(MemoryStorage::new())),
        Config::default(),
        Arc::new(FixedClock::on(today)),
    )
}

/// Manager over JSON files in a fresh temp directory, plus that directory.
pub fn file_manager(today: NaiveDate) -> (FinanceManager, std::path::PathBuf) {
    let dir = temp_dir();
    let storage = JsonFileStorage::new(dir.join("data")).expect("create json storage");
    let manager = FinanceManager::with_clock(
        Persistence::new(Arc::new(storage)),
        Config::default(),
        Arc::new(FixedClock::on(today)),
    );
    (manager, dir)
}
