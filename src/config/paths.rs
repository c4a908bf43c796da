//! Path management for BudgetWise
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETWISE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/budgetwise` on Linux, `%APPDATA%\budgetwise` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetWiseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETWISE_DATA_DIR";

/// Manages all paths used by BudgetWise
#[derive(Debug, Clone)]
pub struct BudgetWisePaths {
    /// Base directory for all BudgetWise data
    base_dir: PathBuf,
}

impl BudgetWisePaths {
    /// Create a new BudgetWisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, BudgetWiseError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetWisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per stored collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetWiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetWiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetWiseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetWiseError> {
    ProjectDirs::from("", "", "budgetwise")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetWiseError::Config("Could not determine home directory".into()))
}
