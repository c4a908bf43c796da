//! Financial Overview
//!
//! Monthly income against monthly expenses, with savings advice.

use crate::config::Settings;
use crate::engine::{
    calculate_total_monthly_expenses, calculate_total_monthly_income, savings_advice,
    SavingsAdvice,
};
use crate::models::{Expense, IncomeSource};

/// Financial Overview
#[derive(Debug, Clone)]
pub struct FinancialOverview {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub projected_savings: f64,
    pub advice: SavingsAdvice,
    pub income_count: usize,
    pub expense_count: usize,
}

impl FinancialOverview {
    pub fn build(incomes: &[IncomeSource], expenses: &[Expense]) -> Self {
        let monthly_income = calculate_total_monthly_income(incomes);
        let monthly_expenses = calculate_total_monthly_expenses(expenses);

        Self {
            monthly_income,
            monthly_expenses,
            projected_savings: monthly_income - monthly_expenses,
            advice: savings_advice(monthly_income, monthly_expenses, expenses),
            income_count: incomes.len(),
            expense_count: expenses.len(),
        }
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Financial Overview\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        output.push_str(&format!(
            "Total Monthly Income:      {:>20}\n",
            settings.format_amount(self.monthly_income)
        ));
        output.push_str(&format!(
            "Total Monthly Expenses:    {:>20}\n",
            settings.format_amount(self.monthly_expenses)
        ));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Projected Monthly Savings: {:>20}\n",
            settings.format_amount(self.projected_savings)
        ));
        output.push('\n');
        output.push_str(&self.advice.message(&settings.currency_symbol));
        output.push('\n');

        output
    }
}
