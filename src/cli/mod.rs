//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod goal;
pub mod income;
pub mod investment;
pub mod summary;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use summary::handle_summary_command;

use chrono::{Local, NaiveDate};

use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{parse_amount, parse_iso_date};

/// Parse a user-entered amount such as "1,250.00" or "€40"
pub(crate) fn parse_amount_arg(input: &str, field: &str) -> BudgetWiseResult<f64> {
    parse_amount(input)
        .map_err(|e| BudgetWiseError::Validation(format!("Invalid {}: {}", field, e)))
}

/// Parse a user-entered date: "today" or YYYY-MM-DD
pub(crate) fn parse_date_arg(input: &str) -> BudgetWiseResult<NaiveDate> {
    if input.trim().eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    parse_iso_date(input.trim()).ok_or_else(|| {
        BudgetWiseError::Validation(format!(
            "Invalid date: '{}'. Use YYYY-MM-DD or 'today'",
            input
        ))
    })
}

pub(crate) fn parse_optional_date(input: Option<&str>) -> BudgetWiseResult<Option<NaiveDate>> {
    input.map(parse_date_arg).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_arg() {
        assert_eq!(parse_amount_arg("1,250.50", "amount").unwrap(), 1250.5);
        let err = parse_amount_arg("abc", "amount").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid amount"));
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(parse_date_arg("Today").unwrap(), Local::now().date_naive());
        assert!(parse_date_arg("29/02/2024").unwrap_err().is_validation());
        assert_eq!(parse_optional_date(None).unwrap(), None);
    }
}
