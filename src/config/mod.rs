//! Configuration module for BudgetWise
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetWisePaths;
pub use settings::{Settings, DEFAULT_CURRENCY_SYMBOL};
