//! Income display formatting

use tabled::Tabled;

use super::{optional_date, render_table};
use crate::config::Settings;
use crate::engine::calculate_total_monthly_income;
use crate::models::IncomeSource;

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Monthly Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format income sources as a table with the monthly total
pub fn format_income_list(incomes: &[IncomeSource], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No income sources added yet.\n".to_string();
    }

    let rows = incomes
        .iter()
        .map(|i| IncomeRow {
            id: i.id.to_string(),
            name: i.name.clone(),
            category: i.category.to_string(),
            amount: settings.format_amount(i.amount),
            date: optional_date(settings, i.date),
        })
        .collect();

    let mut output = render_table(rows);
    output.push_str(&format!(
        "Total Monthly Income: {}\n",
        settings.format_amount(calculate_total_monthly_income(incomes))
    ));
    output
}

pub fn format_income_details(income: &IncomeSource, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income: {}\n", income.name));
    output.push_str(&format!("  ID:       {}\n", income.id));
    output.push_str(&format!("  Category: {}\n", income.category));
    output.push_str(&format!("  Amount:   {}\n", settings.format_amount(income.amount)));
    if let Some(date) = income.date {
        output.push_str(&format!("  Date:     {}\n", settings.format_date(date)));
    }
    output
}
