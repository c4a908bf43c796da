//! Display formatting for terminal output
//!
//! List views are rendered as tables; detail views as aligned key/value
//! blocks. Amounts and dates follow the user's settings.

pub mod expense;
pub mod goal;
pub mod income;
pub mod investment;

pub use expense::{format_expense_details, format_expense_list};
pub use goal::{format_goal_details, format_goal_list};
pub use income::{format_income_details, format_income_list};
pub use investment::{format_investment_details, format_investment_list};

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;

/// Render rows as a rounded table
pub(crate) fn render_table<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// A date in the configured format, or "-" when absent
pub(crate) fn optional_date(settings: &Settings, date: Option<NaiveDate>) -> String {
    date.map(|d| settings.format_date(d))
        .unwrap_or_else(|| "-".to_string())
}
