//! Income CLI commands
//!
//! Implements CLI commands for managing monthly income sources.

use clap::Subcommand;

use super::{parse_amount_arg, parse_optional_date};
use crate::config::Settings;
use crate::display::income::{format_income_details, format_income_list};
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{IncomeCategory, IncomeSource};
use crate::services::{IncomeEdit, IncomeService};
use crate::storage::StorageGateway;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add a monthly income source
    Add {
        /// Income name
        name: String,
        /// Monthly amount (e.g., "2500" or "2,500.00")
        amount: String,
        /// Category (salary, freelance, rent, investment, other)
        #[arg(short, long, default_value = "salary")]
        category: String,
        /// Date received (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all income sources
    List,
    /// Show income source details
    Show {
        /// Income name or ID
        income: String,
    },
    /// Edit an income source
    Edit {
        /// Income name or ID
        income: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Remove an income source
    Remove {
        /// Income name or ID
        income: String,
    },
}

fn parse_category(input: &str) -> BudgetWiseResult<IncomeCategory> {
    IncomeCategory::parse(input).ok_or_else(|| {
        BudgetWiseError::Validation(format!(
            "Invalid income category: '{}'. Valid categories: salary, freelance, rent, investment, other",
            input
        ))
    })
}

/// Handle an income command
pub fn handle_income_command(
    gateway: &StorageGateway,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetWiseResult<()> {
    let service = IncomeService::new(gateway);

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let mut income = IncomeSource::new(
                name,
                parse_category(&category)?,
                parse_amount_arg(&amount, "amount")?,
            );
            income.date = parse_optional_date(date.as_deref())?;

            let income = service.add(income)?;
            println!("Added income source: {}", income.name);
            println!("  Amount: {}", settings.format_amount(income.amount));
            println!("  ID: {}", income.id);
        }

        IncomeCommands::List => {
            print!("{}", format_income_list(&service.list(), settings));
        }

        IncomeCommands::Show { income } => {
            let found = service
                .find(&income)
                .ok_or_else(|| BudgetWiseError::income_not_found(&income))?;
            print!("{}", format_income_details(&found, settings));
        }

        IncomeCommands::Edit {
            income,
            name,
            amount,
            category,
            date,
        } => {
            let found = service
                .find(&income)
                .ok_or_else(|| BudgetWiseError::income_not_found(&income))?;

            let edit = IncomeEdit {
                name,
                category: category.as_deref().map(parse_category).transpose()?,
                amount: amount
                    .as_deref()
                    .map(|a| parse_amount_arg(a, "amount"))
                    .transpose()?,
                date: parse_optional_date(date.as_deref())?,
            };

            let updated = service.update(found.id, edit)?;
            println!("Updated income source: {}", updated.name);
        }

        IncomeCommands::Remove { income } => {
            let found = service
                .find(&income)
                .ok_or_else(|| BudgetWiseError::income_not_found(&income))?;

            service.remove(found.id)?;
            println!("Removed income source: {}", found.name);
        }
    }

    Ok(())
}
