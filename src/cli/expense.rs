//! Expense CLI commands
//!
//! Implements CLI commands for expenses and subscriptions.

use clap::Subcommand;

use super::{parse_amount_arg, parse_optional_date};
use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{Expense, ExpenseCategory, Frequency};
use crate::services::{ExpenseEdit, ExpenseService};
use crate::storage::StorageGateway;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense
    Add {
        /// Expense name
        name: String,
        /// Amount per payment
        amount: String,
        /// Category (fixed, subscription, variable, other)
        #[arg(short, long, default_value = "variable")]
        category: String,
        /// How often it is paid (once, daily, weekly, monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Date paid (YYYY-MM-DD)
        #[arg(long)]
        paid: Option<String>,
        /// Next renewal date, for subscriptions (YYYY-MM-DD)
        #[arg(long)]
        renews: Option<String>,
        /// Service provider, e.g. Netflix
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// List expenses
    List {
        /// Only show subscriptions
        #[arg(short, long)]
        subscriptions: bool,
    },
    /// Show expense details
    Show {
        /// Expense name or ID
        expense: String,
    },
    /// Edit an expense
    Edit {
        /// Expense name or ID
        expense: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        paid: Option<String>,
        #[arg(long)]
        renews: Option<String>,
        /// Service provider; an empty value clears it
        #[arg(short, long)]
        provider: Option<String>,
    },
    /// Remove an expense
    Remove {
        /// Expense name or ID
        expense: String,
    },
}

fn parse_category(input: &str) -> BudgetWiseResult<ExpenseCategory> {
    ExpenseCategory::parse(input).ok_or_else(|| {
        BudgetWiseError::Validation(format!(
            "Invalid expense category: '{}'. Valid categories: fixed, subscription, variable, other",
            input
        ))
    })
}

fn parse_frequency(input: &str) -> BudgetWiseResult<Frequency> {
    Frequency::parse(input).ok_or_else(|| {
        BudgetWiseError::Validation(format!(
            "Invalid frequency: '{}'. Valid frequencies: once, daily, weekly, monthly, yearly",
            input
        ))
    })
}

/// Handle an expense command
pub fn handle_expense_command(
    gateway: &StorageGateway,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetWiseResult<()> {
    let service = ExpenseService::new(gateway);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            frequency,
            due,
            paid,
            renews,
            provider,
        } => {
            let mut expense = Expense::new(
                name,
                parse_category(&category)?,
                parse_amount_arg(&amount, "amount")?,
                Some(parse_frequency(&frequency)?),
            );
            expense.due_date = parse_optional_date(due.as_deref())?;
            expense.payment_date = parse_optional_date(paid.as_deref())?;
            expense.renewal_date = parse_optional_date(renews.as_deref())?;
            expense.service_provider = provider.filter(|p| !p.trim().is_empty());

            let expense = service.add(expense)?;
            println!("Added expense: {}", expense.name);
            println!("  Amount: {}", settings.format_amount(expense.amount));
            if let Some(frequency) = expense.frequency {
                println!("  Frequency: {}", frequency);
            }
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { subscriptions } => {
            let expenses = if subscriptions {
                service.subscriptions()
            } else {
                service.list()
            };
            print!("{}", format_expense_list(&expenses, settings));
        }

        ExpenseCommands::Show { expense } => {
            let found = service
                .find(&expense)
                .ok_or_else(|| BudgetWiseError::expense_not_found(&expense))?;
            print!("{}", format_expense_details(&found, settings));
        }

        ExpenseCommands::Edit {
            expense,
            name,
            amount,
            category,
            frequency,
            due,
            paid,
            renews,
            provider,
        } => {
            let found = service
                .find(&expense)
                .ok_or_else(|| BudgetWiseError::expense_not_found(&expense))?;

            let edit = ExpenseEdit {
                name,
                category: category.as_deref().map(parse_category).transpose()?,
                amount: amount
                    .as_deref()
                    .map(|a| parse_amount_arg(a, "amount"))
                    .transpose()?,
                frequency: frequency.as_deref().map(parse_frequency).transpose()?,
                due_date: parse_optional_date(due.as_deref())?,
                payment_date: parse_optional_date(paid.as_deref())?,
                renewal_date: parse_optional_date(renews.as_deref())?,
                service_provider: provider,
            };

            let updated = service.update(found.id, edit)?;
            println!("Updated expense: {}", updated.name);
        }

        ExpenseCommands::Remove { expense } => {
            let found = service
                .find(&expense)
                .ok_or_else(|| BudgetWiseError::expense_not_found(&expense))?;

            service.remove(found.id)?;
            println!("Removed expense: {}", found.name);
        }
    }

    Ok(())
}
