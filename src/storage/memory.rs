use std::{collections::HashMap, sync::Mutex};

use crate::core::errors::{FinanceError, Result};

use super::StorageBackend;

/// In-process store, used by tests and by callers that do not want files on disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| FinanceError::StorageError("memory store poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, data: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| FinanceError::StorageError("memory store poisoned".into()))?;
        entries.insert(key.to_string(), data.to_string());
        Ok(())
    }
}
