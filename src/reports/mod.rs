//! Reports module for BudgetWise
//!
//! Summaries built from the stored collections: the monthly financial
//! overview with savings advice, portfolio performance, and goal progress.

pub mod goals;
pub mod overview;
pub mod portfolio;

pub use goals::{GoalReport, GoalStatus};
pub use overview::FinancialOverview;
pub use portfolio::{InvestmentPerformance, PortfolioSummary};
