//! Investment display formatting

use tabled::Tabled;

use super::render_table;
use crate::config::Settings;
use crate::models::Investment;
use crate::reports::{InvestmentPerformance, PortfolioSummary};

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Initial")]
    initial: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Profit/Loss")]
    profit_loss: String,
    #[tabled(rename = "Linked Income")]
    linked_income: String,
}

fn profit_loss_text(row: &InvestmentPerformance, settings: &Settings) -> String {
    format!(
        "{} ({:.1}%)",
        settings.format_amount(row.profit_loss),
        row.profit_loss_percent
    )
}

/// Format the portfolio as a table followed by its totals
pub fn format_investment_list(summary: &PortfolioSummary, settings: &Settings) -> String {
    if summary.is_empty() {
        return "No investments added yet.\n".to_string();
    }

    let rows = summary
        .investments
        .iter()
        .map(|row| InvestmentRow {
            id: row.investment_id.to_string(),
            name: row.name.clone(),
            symbol: row.symbol.clone().unwrap_or_else(|| "-".to_string()),
            initial: settings.format_amount(row.initial_amount),
            current: settings.format_amount(row.current_value),
            profit_loss: profit_loss_text(row, settings),
            linked_income: row.linked_income.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut output = render_table(rows);
    output.push('\n');
    output.push_str(&summary.format_terminal(settings));
    output
}

/// Format a single investment with its performance
pub fn format_investment_details(
    investment: &Investment,
    performance: &InvestmentPerformance,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Investment: {}\n", investment.name));
    output.push_str(&format!("  ID:            {}\n", investment.id));
    output.push_str(&format!(
        "  Initial:       {}\n",
        settings.format_amount(investment.initial_amount)
    ));
    output.push_str(&format!(
        "  Current Value: {}\n",
        settings.format_amount(investment.current_value)
    ));
    output.push_str(&format!(
        "  Profit/Loss:   {}\n",
        profit_loss_text(performance, settings)
    ));
    output.push_str(&format!(
        "  Start Date:    {}\n",
        settings.format_date(investment.start_date)
    ));
    if let Some(symbol) = &investment.symbol {
        output.push_str(&format!("  Symbol:        {}\n", symbol));
    }
    if let Some(shares) = investment.shares {
        output.push_str(&format!("  Shares:        {}\n", shares));
    }
    if let Some(income) = &performance.linked_income {
        output.push_str(&format!("  Linked Income: {}\n", income));
    }

    output
}
