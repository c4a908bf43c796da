//! Investment CLI commands
//!
//! Implements CLI commands for tracking investments and their simulated
//! current values.

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount_arg, parse_date_arg, parse_optional_date};
use crate::config::Settings;
use crate::display::investment::{format_investment_details, format_investment_list};
use crate::engine::ThreadRandom;
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{IncomeId, Investment};
use crate::reports::PortfolioSummary;
use crate::services::{IncomeService, InvestmentEdit, InvestmentService};
use crate::storage::StorageGateway;

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Add an investment
    Add {
        /// Investment name
        name: String,
        /// Amount initially invested
        initial: String,
        /// Start date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        start: Option<String>,
        /// Known current value; simulated when omitted
        #[arg(short = 'c', long)]
        current_value: Option<String>,
        /// Ticker symbol
        #[arg(long)]
        symbol: Option<String>,
        /// Number of shares held
        #[arg(long)]
        shares: Option<String>,
        /// Income source funding this investment (name or ID)
        #[arg(short, long)]
        income: Option<String>,
    },
    /// List investments with profit/loss
    List,
    /// Show investment details
    Show {
        /// Investment name or ID
        investment: String,
    },
    /// Edit an investment
    Edit {
        /// Investment name or ID
        investment: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        initial: Option<String>,
        #[arg(short, long)]
        start: Option<String>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long)]
        shares: Option<String>,
        /// Link to an income source (name or ID)
        #[arg(short, long, conflicts_with = "unlink")]
        income: Option<String>,
        /// Remove the income source link
        #[arg(long)]
        unlink: bool,
    },
    /// Re-simulate current values
    Refresh {
        /// Investment name or ID; all investments when omitted
        investment: Option<String>,
    },
    /// Record a known current value
    SetValue {
        /// Investment name or ID
        investment: String,
        /// Current value
        value: String,
    },
    /// Remove an investment
    Remove {
        /// Investment name or ID
        investment: String,
    },
}

fn resolve_income(gateway: &StorageGateway, identifier: &str) -> BudgetWiseResult<IncomeId> {
    IncomeService::new(gateway)
        .find(identifier)
        .map(|income| income.id)
        .ok_or_else(|| BudgetWiseError::income_not_found(identifier))
}

fn parse_shares(input: Option<&str>) -> BudgetWiseResult<Option<f64>> {
    input.map(|s| parse_amount_arg(s, "shares")).transpose()
}

/// Handle an investment command
pub fn handle_investment_command(
    gateway: &StorageGateway,
    settings: &Settings,
    cmd: InvestmentCommands,
) -> BudgetWiseResult<()> {
    let service = InvestmentService::new(gateway);
    let mut rng = ThreadRandom;

    match cmd {
        InvestmentCommands::Add {
            name,
            initial,
            start,
            current_value,
            symbol,
            shares,
            income,
        } => {
            let initial = parse_amount_arg(&initial, "initial amount")?;
            let start = match start {
                Some(s) => parse_date_arg(&s)?,
                None => Local::now().date_naive(),
            };

            let mut investment = Investment::new(name, initial, start);
            investment.current_value = match current_value {
                Some(v) => parse_amount_arg(&v, "current value")?,
                None if settings.simulate_on_add => 0.0,
                None => initial,
            };
            investment.symbol = symbol
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty());
            investment.shares = parse_shares(shares.as_deref())?;
            investment.linked_income_id = income
                .as_deref()
                .map(|i| resolve_income(gateway, i))
                .transpose()?;

            let investment = service.add(investment, &mut rng)?;
            println!("Added investment: {}", investment.name);
            println!("  Initial: {}", settings.format_amount(investment.initial_amount));
            println!(
                "  Current Value: {}",
                settings.format_amount(investment.current_value)
            );
            println!("  ID: {}", investment.id);
        }

        InvestmentCommands::List => {
            let investments = service.load_valued(&mut rng);
            let incomes = IncomeService::new(gateway).list();
            let summary = PortfolioSummary::build(&investments, &incomes);
            print!("{}", format_investment_list(&summary, settings));
        }

        InvestmentCommands::Show { investment } => {
            service.load_valued(&mut rng);
            let found = service
                .find(&investment)
                .ok_or_else(|| BudgetWiseError::investment_not_found(&investment))?;

            let incomes = IncomeService::new(gateway).list();
            let summary = PortfolioSummary::build(std::slice::from_ref(&found), &incomes);
            if let Some(performance) = summary.investments.first() {
                print!("{}", format_investment_details(&found, performance, settings));
            }
        }

        InvestmentCommands::Edit {
            investment,
            name,
            initial,
            start,
            symbol,
            shares,
            income,
            unlink,
        } => {
            let found = service
                .find(&investment)
                .ok_or_else(|| BudgetWiseError::investment_not_found(&investment))?;

            let linked_income_id = if unlink {
                Some(None)
            } else {
                income
                    .as_deref()
                    .map(|i| resolve_income(gateway, i).map(Some))
                    .transpose()?
            };

            let edit = InvestmentEdit {
                name,
                initial_amount: initial
                    .as_deref()
                    .map(|a| parse_amount_arg(a, "initial amount"))
                    .transpose()?,
                start_date: parse_optional_date(start.as_deref())?,
                symbol,
                shares: parse_shares(shares.as_deref())?,
                linked_income_id,
            };

            let updated = service.update(found.id, edit)?;
            println!("Updated investment: {}", updated.name);
        }

        InvestmentCommands::Refresh { investment } => match investment {
            Some(identifier) => {
                let found = service
                    .find(&identifier)
                    .ok_or_else(|| BudgetWiseError::investment_not_found(&identifier))?;
                let refreshed = service.refresh(found.id, &mut rng)?;
                println!(
                    "Refreshed {}: {}",
                    refreshed.name,
                    settings.format_amount(refreshed.current_value)
                );
            }
            None => {
                let refreshed = service.refresh_all(&mut rng)?;
                println!("Refreshed {} investment(s)", refreshed.len());
                for investment in &refreshed {
                    println!(
                        "  {}: {}",
                        investment.name,
                        settings.format_amount(investment.current_value)
                    );
                }
            }
        },

        InvestmentCommands::SetValue { investment, value } => {
            let found = service
                .find(&investment)
                .ok_or_else(|| BudgetWiseError::investment_not_found(&investment))?;
            let value = parse_amount_arg(&value, "current value")?;

            let updated = service.set_value(found.id, value)?;
            println!(
                "Set current value of {} to {}",
                updated.name,
                settings.format_amount(updated.current_value)
            );
        }

        InvestmentCommands::Remove { investment } => {
            let found = service
                .find(&investment)
                .ok_or_else(|| BudgetWiseError::investment_not_found(&investment))?;

            service.remove(found.id)?;
            println!("Removed investment: {}", found.name);
        }
    }

    Ok(())
}
