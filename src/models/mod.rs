//! Core data models for BudgetWise
//!
//! Income sources, expenses, investments and savings goals, plus the id,
//! amount and date helpers they share.

pub mod amount;
pub mod dates;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod investment;

pub use amount::{parse_amount, round_to_cents, AmountParseError};
pub use dates::parse_iso_date;
pub use expense::{Expense, ExpenseCategory, Frequency};
pub use goal::{FinancialGoal, GoalPriority};
pub use ids::{ExpenseId, GoalId, IncomeId, InvestmentId};
pub use income::{IncomeCategory, IncomeSource};
pub use investment::Investment;
