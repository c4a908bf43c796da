//! BudgetWise - personal finance tracking
//!
//! This library provides the core functionality for the BudgetWise
//! application: monthly income and expense tracking, simulated investment
//! values, savings-goal projections, and rule-based savings advice.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (income, expenses, investments, goals)
//! - `storage`: Key/value JSON persistence over a pluggable medium
//! - `engine`: Pure calculations (totals, simulation, projection, advice)
//! - `services`: Business logic layer
//! - `reports`: Overview, portfolio and goal summaries
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budgetwise::config::{BudgetWisePaths, Settings};
//! use budgetwise::storage::StorageGateway;
//!
//! let paths = BudgetWisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let gateway = StorageGateway::open(&paths);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetWiseError, BudgetWiseResult};
