//! Key-value persistence for the JSON-serialized finance collections.
//!
//! Backends only move raw strings. [`Persistence`] layers typed collection access on top and
//! never propagates failures: unreadable data comes back as an empty collection and failed
//! writes are logged.

pub mod json_backend;
pub mod memory;

use std::{fmt, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};

use crate::core::errors::Result;

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;

pub const DEFAULT_KEY_NAMESPACE: &str = "finance-tracker";

/// Abstraction over raw string storage addressed by key.
pub trait StorageBackend: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, data: &str) -> Result<()>;
}

/// Logical collections persisted by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Expenses,
    Budgets,
    Assets,
    Liabilities,
    Subscriptions,
    NetWorthHistory,
}

impl StorageKey {
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Expenses,
        StorageKey::Budgets,
        StorageKey::Assets,
        StorageKey::Liabilities,
        StorageKey::Subscriptions,
        StorageKey::NetWorthHistory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Expenses => "expenses",
            StorageKey::Budgets => "budgets",
            StorageKey::Assets => "assets",
            StorageKey::Liabilities => "liabilities",
            StorageKey::Subscriptions => "subscriptions",
            StorageKey::NetWorthHistory => "net-worth-history",
        }
    }

    pub fn namespaced(self, namespace: &str) -> String {
        format!("{}-{}", namespace, self.as_str())
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed collection access over an optional backend.
///
/// Without a backend (no storage context), reads are empty and writes are no-ops.
#[derive(Clone)]
pub struct Persistence {
    backend: Option<Arc<dyn StorageBackend>>,
    namespace: String,
}

impl Persistence {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_namespace(backend, DEFAULT_KEY_NAMESPACE)
    }

    pub fn with_namespace(backend: Arc<dyn StorageBackend>, namespace: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            namespace: namespace.into(),
        }
    }

    pub fn detached() -> Self {
        Self {
            backend: None,
            namespace: DEFAULT_KEY_NAMESPACE.to_string(),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    pub fn key_for(&self, key: StorageKey) -> String {
        key.namespaced(&self.namespace)
    }

    pub fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
        let Some(backend) = self.backend.as_ref() else {
            return Vec::new();
        };
        let name = self.key_for(key);
        let raw = match backend.read(&name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %name, error = %err, "failed to read collection");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(key = %name, error = %err, "discarding malformed collection");
                Vec::new()
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: StorageKey, items: &[T]) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        let name = self.key_for(key);
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(key = %name, error = %err, "failed to serialize collection");
                return;
            }
        };
        if let Err(err) = backend.write(&name, &json) {
            tracing::error!(key = %name, error = %err, "failed to write collection");
        } else {
            tracing::debug!(key = %name, count = items.len(), "collection saved");
        }
    }
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence")
            .field("attached", &self.is_attached())
            .field("namespace", &self.namespace)
            .finish()
    }
}
