//! Portfolio Summary
//!
//! Totals and per-investment profit/loss across all investments.

use crate::config::Settings;
use crate::engine::calculate_investment_profit_loss;
use crate::models::{IncomeSource, Investment, InvestmentId};
use crate::services::linked_income_name;

/// Profit/loss of a single investment
#[derive(Debug, Clone)]
pub struct InvestmentPerformance {
    pub investment_id: InvestmentId,
    pub name: String,
    pub symbol: Option<String>,
    pub initial_amount: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    /// Profit/loss relative to the initial amount; 0 when that is 0
    pub profit_loss_percent: f64,
    /// `Some("N/A")` when the linked income no longer exists
    pub linked_income: Option<String>,
}

/// Portfolio Summary
#[derive(Debug, Clone)]
pub struct PortfolioSummary {
    pub investments: Vec<InvestmentPerformance>,
    pub total_initial: f64,
    pub total_current: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percent: f64,
}

/// `part / whole * 100`, or 0 when the ratio is undefined
fn percent_of(part: f64, whole: f64) -> f64 {
    let percent = part / whole * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl PortfolioSummary {
    /// Build the summary for `investments`, resolving income links in `incomes`
    pub fn build(investments: &[Investment], incomes: &[IncomeSource]) -> Self {
        let rows: Vec<InvestmentPerformance> = investments
            .iter()
            .map(|inv| {
                let profit_loss = calculate_investment_profit_loss(inv);
                InvestmentPerformance {
                    investment_id: inv.id,
                    name: inv.name.clone(),
                    symbol: inv.symbol.clone(),
                    initial_amount: inv.initial_amount,
                    current_value: inv.current_value,
                    profit_loss,
                    profit_loss_percent: percent_of(profit_loss, inv.initial_amount),
                    linked_income: inv.linked_income_id.map(|_| {
                        linked_income_name(inv, incomes)
                            .unwrap_or("N/A")
                            .to_string()
                    }),
                }
            })
            .collect();

        let total_initial: f64 = investments
            .iter()
            .map(|i| finite_or_zero(i.initial_amount))
            .sum();
        let total_current: f64 = investments
            .iter()
            .map(|i| finite_or_zero(i.current_value))
            .sum();
        let total_profit_loss = total_current - total_initial;

        Self {
            investments: rows,
            total_initial,
            total_current,
            total_profit_loss,
            total_profit_loss_percent: percent_of(total_profit_loss, total_initial),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Portfolio Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "Total Initial Investment: {:>20}\n",
            settings.format_amount(self.total_initial)
        ));
        output.push_str(&format!(
            "Total Current Value:      {:>20}\n",
            settings.format_amount(self.total_current)
        ));
        output.push_str(&format!(
            "Total Profit/Loss:        {:>20} ({:.1}%)\n",
            settings.format_amount(self.total_profit_loss),
            self.total_profit_loss_percent
        ));

        output
    }
}
