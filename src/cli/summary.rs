//! Summary command
//!
//! Prints the financial overview with savings advice, the portfolio summary
//! and goal projections in one go.

use crate::config::Settings;
use crate::engine::ThreadRandom;
use crate::error::BudgetWiseResult;
use crate::reports::{FinancialOverview, GoalReport, PortfolioSummary};
use crate::services::{ExpenseService, GoalService, IncomeService, InvestmentService};
use crate::storage::StorageGateway;

/// Build the summary text for everything currently stored
pub fn render_summary(gateway: &StorageGateway, settings: &Settings) -> String {
    let incomes = IncomeService::new(gateway).list();
    let expenses = ExpenseService::new(gateway).list();
    let investments = InvestmentService::new(gateway).load_valued(&mut ThreadRandom);
    let goals = GoalService::new(gateway).list();

    let overview = FinancialOverview::build(&incomes, &expenses);
    let portfolio = PortfolioSummary::build(&investments, &incomes);
    let goal_report = GoalReport::build(overview.monthly_income, overview.monthly_expenses, &goals);

    let mut output = overview.format_terminal(settings);
    output.push('\n');
    output.push_str(&portfolio.format_terminal(settings));
    output.push('\n');
    output.push_str(&goal_report.format_terminal(settings));
    output
}

/// Handle the summary command
pub fn handle_summary_command(gateway: &StorageGateway, settings: &Settings) -> BudgetWiseResult<()> {
    print!("{}", render_summary(gateway, settings));
    Ok(())
}
