//! Persistence gateway
//!
//! Stores whole JSON-serialized values under named keys. Storage is
//! best-effort: serialization and medium failures are logged and degrade to
//! a no-op (writes) or `None` (reads). Callers never see an error, so the
//! application stays usable when storage is unavailable.

use serde::{de::DeserializeOwned, Serialize};

use crate::config::paths::BudgetWisePaths;
use crate::models::{Expense, FinancialGoal, IncomeSource, Investment};

use super::medium::{FileMedium, MemoryMedium, StorageMedium};

pub const INCOME_SOURCES_KEY: &str = "app_incomeSources";
pub const EXPENSES_KEY: &str = "app_expenses";
pub const INVESTMENTS_KEY: &str = "app_investments";
pub const GOALS_KEY: &str = "app_financialGoals";

/// An entity type stored as one JSON array under a fixed key
pub trait StoredCollection: Serialize + DeserializeOwned {
    const KEY: &'static str;
}

impl StoredCollection for IncomeSource {
    const KEY: &'static str = INCOME_SOURCES_KEY;
}

impl StoredCollection for Expense {
    const KEY: &'static str = EXPENSES_KEY;
}

impl StoredCollection for Investment {
    const KEY: &'static str = INVESTMENTS_KEY;
}

impl StoredCollection for FinancialGoal {
    const KEY: &'static str = GOALS_KEY;
}

/// Outcome of reading a key
#[derive(Debug, Clone, PartialEq)]
pub enum Stored<T> {
    Absent,
    Present(T),
    /// Present but unreadable or unparseable
    Unreadable,
}

/// Generic get/set/remove of JSON values over a storage medium
pub struct StorageGateway {
    medium: Box<dyn StorageMedium>,
}

impl StorageGateway {
    pub fn new(medium: impl StorageMedium + 'static) -> Self {
        Self {
            medium: Box::new(medium),
        }
    }

    /// Gateway over the data directory of `paths`
    pub fn open(paths: &BudgetWisePaths) -> Self {
        Self::new(FileMedium::new(paths.data_dir()))
    }

    /// Gateway whose contents live only as long as the process
    pub fn in_memory() -> Self {
        Self::new(MemoryMedium::new())
    }

    /// Serialize `value` and store it under `key`
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let contents = match serde_json::to_string_pretty(value) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::error!(key, error = %e, "Failed to serialize value for storage");
                return;
            }
        };

        if let Err(e) = self.medium.write(key, &contents) {
            tracing::error!(key, error = %e, "Failed to save data");
        }
    }

    /// Load and deserialize the value stored under `key`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read(key) {
            Stored::Present(value) => Some(value),
            Stored::Absent | Stored::Unreadable => None,
        }
    }

    /// Like [`get`](Self::get), but tells an absent key apart from one whose
    /// contents could not be read or parsed
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Stored<T> {
        let contents = match self.medium.read(key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Stored::Absent,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read stored data");
                return Stored::Unreadable;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Stored::Present(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored data could not be parsed");
                Stored::Unreadable
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.medium.delete(key) {
            tracing::warn!(key, error = %e, "Failed to remove stored data");
        }
    }

    /// Purge every entry held by the underlying medium
    pub fn clear_all(&self) {
        match self.medium.clear() {
            Ok(()) => tracing::info!("Storage cleared"),
            Err(e) => tracing::error!(error = %e, "Failed to clear storage"),
        }
    }

    /// Keys currently present in the medium
    pub fn keys(&self) -> Vec<String> {
        self.medium.keys().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to list stored keys");
            Vec::new()
        })
    }

    /// Load a whole collection, or an empty one when absent or unreadable
    pub fn load_collection<T: StoredCollection>(&self) -> Vec<T> {
        self.get(T::KEY).unwrap_or_default()
    }

    /// Load a collection that is about to be modified and saved back
    ///
    /// Returns `None` when stored data exists but cannot be read, so that
    /// callers never replace it with a partial view.
    pub fn load_collection_for_update<T: StoredCollection>(&self) -> Option<Vec<T>> {
        match self.read(T::KEY) {
            Stored::Present(items) => Some(items),
            Stored::Absent => Some(Vec::new()),
            Stored::Unreadable => None,
        }
    }

    /// Replace a whole collection
    pub fn save_collection<T: StoredCollection>(&self, items: &[T]) {
        self.set(T::KEY, items);
    }
}
