//! Goal CLI commands
//!
//! Implements CLI commands for financial goals, including contributions and
//! completion projections.

use clap::Subcommand;

use super::{parse_amount_arg, parse_optional_date};
use crate::config::Settings;
use crate::display::goal::{format_goal_details, format_goal_list};
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{FinancialGoal, GoalPriority};
use crate::reports::GoalReport;
use crate::services::{ExpenseService, GoalEdit, GoalService, IncomeService};
use crate::storage::StorageGateway;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount
        target: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
        /// Target date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// Priority (low, medium, high)
        #[arg(short, long, default_value = "medium")]
        priority: String,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },
    /// List goals with progress and projections
    List,
    /// Show goal details
    Show {
        /// Goal name or ID
        goal: String,
    },
    /// Edit a goal
    Edit {
        /// Goal name or ID
        goal: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        target: Option<String>,
        #[arg(short, long)]
        saved: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        priority: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add money to a goal
    Contribute {
        /// Goal name or ID
        goal: String,
        /// Amount to add
        amount: String,
    },
    /// Remove a goal
    Remove {
        /// Goal name or ID
        goal: String,
    },
}

fn parse_priority(input: &str) -> BudgetWiseResult<GoalPriority> {
    GoalPriority::parse(input).ok_or_else(|| {
        BudgetWiseError::Validation(format!(
            "Invalid priority: '{}'. Valid priorities: low, medium, high",
            input
        ))
    })
}

/// Goals projected against the current monthly income and expenses
fn build_report(gateway: &StorageGateway, goals: &[FinancialGoal]) -> GoalReport {
    let income = IncomeService::new(gateway).total_monthly();
    let expenses = ExpenseService::new(gateway).total_monthly();
    GoalReport::build(income, expenses, goals)
}

/// Handle a goal command
pub fn handle_goal_command(
    gateway: &StorageGateway,
    settings: &Settings,
    cmd: GoalCommands,
) -> BudgetWiseResult<()> {
    let service = GoalService::new(gateway);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            saved,
            date,
            priority,
            description,
        } => {
            let mut goal = FinancialGoal::new(name, parse_amount_arg(&target, "target amount")?);
            if let Some(saved) = saved {
                goal.current_amount = parse_amount_arg(&saved, "saved amount")?;
            }
            goal.target_date = parse_optional_date(date.as_deref())?;
            goal.priority = parse_priority(&priority)?;
            goal.description = description.filter(|d| !d.trim().is_empty());

            let goal = service.add(goal)?;
            println!("Added goal: {}", goal.name);
            println!("  Target: {}", settings.format_amount(goal.target_amount));
            println!("  ID: {}", goal.id);
        }

        GoalCommands::List => {
            let report = build_report(gateway, &service.list());
            print!("{}", format_goal_list(&report, settings));
        }

        GoalCommands::Show { goal } => {
            let found = service
                .find(&goal)
                .ok_or_else(|| BudgetWiseError::goal_not_found(&goal))?;

            let report = build_report(gateway, std::slice::from_ref(&found));
            if let Some(status) = report.goals.first() {
                print!("{}", format_goal_details(status, settings));
            }
        }

        GoalCommands::Edit {
            goal,
            name,
            target,
            saved,
            date,
            priority,
            description,
        } => {
            let found = service
                .find(&goal)
                .ok_or_else(|| BudgetWiseError::goal_not_found(&goal))?;

            let edit = GoalEdit {
                name,
                target_amount: target
                    .as_deref()
                    .map(|t| parse_amount_arg(t, "target amount"))
                    .transpose()?,
                current_amount: saved
                    .as_deref()
                    .map(|s| parse_amount_arg(s, "saved amount"))
                    .transpose()?,
                target_date: parse_optional_date(date.as_deref())?,
                priority: priority.as_deref().map(parse_priority).transpose()?,
                description,
            };

            let updated = service.update(found.id, edit)?;
            println!("Updated goal: {}", updated.name);
        }

        GoalCommands::Contribute { goal, amount } => {
            let found = service
                .find(&goal)
                .ok_or_else(|| BudgetWiseError::goal_not_found(&goal))?;
            let amount = parse_amount_arg(&amount, "amount")?;

            let updated = service.contribute(found.id, amount)?;
            println!(
                "Added {} to {} ({} of {}, {:.1}%)",
                settings.format_amount(amount),
                updated.name,
                settings.format_amount(updated.current_amount),
                settings.format_amount(updated.target_amount),
                updated.progress_percent()
            );
            if updated.is_reached() {
                println!("Goal reached!");
            }
        }

        GoalCommands::Remove { goal } => {
            let found = service
                .find(&goal)
                .ok_or_else(|| BudgetWiseError::goal_not_found(&goal))?;

            service.remove(found.id)?;
            println!("Removed goal: {}", found.name);
        }
    }

    Ok(())
}
