//! Storage layer for BudgetWise
//!
//! A best-effort persistence gateway storing each collection as one JSON
//! array under a fixed key, over a pluggable key-value medium (JSON files
//! with atomic writes, or memory).

pub mod file_io;
pub mod gateway;
pub mod medium;

pub use gateway::{
    Stored, StorageGateway, StoredCollection, EXPENSES_KEY, GOALS_KEY, INCOME_SOURCES_KEY,
    INVESTMENTS_KEY,
};
pub use medium::{FileMedium, MemoryMedium, StorageMedium};
