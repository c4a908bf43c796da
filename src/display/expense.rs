//! Expense display formatting

use tabled::Tabled;

use super::{optional_date, render_table};
use crate::config::Settings;
use crate::engine::{calculate_total_monthly_expenses, monthly_contribution};
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Per Month")]
    monthly: String,
    #[tabled(rename = "Due")]
    due: String,
}

/// Format expenses as a table with the estimated monthly total
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let rows = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.to_string(),
            name: e.name.clone(),
            category: e.category.to_string(),
            amount: settings.format_amount(e.amount),
            frequency: e
                .frequency
                .map(|f| f.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            monthly: settings.format_amount(monthly_contribution(e)),
            due: optional_date(settings, e.due_date.or(e.renewal_date)),
        })
        .collect();

    let mut output = render_table(rows);
    output.push_str(&format!(
        "Total Estimated Monthly Expenses: {}\n",
        settings.format_amount(calculate_total_monthly_expenses(expenses))
    ));
    output
}

pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:           {}\n", expense.id));
    output.push_str(&format!("  Category:     {}\n", expense.category));
    output.push_str(&format!(
        "  Amount:       {}\n",
        settings.format_amount(expense.amount)
    ));
    output.push_str(&format!(
        "  Frequency:    {}\n",
        expense
            .frequency
            .map(|f| f.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    ));
    output.push_str(&format!(
        "  Per Month:    {}\n",
        settings.format_amount(monthly_contribution(expense))
    ));

    if let Some(provider) = &expense.service_provider {
        output.push_str(&format!("  Provider:     {}\n", provider));
    }
    for (label, date) in [
        ("Due", expense.due_date),
        ("Paid", expense.payment_date),
        ("Renews", expense.renewal_date),
    ] {
        if let Some(date) = date {
            output.push_str(&format!(
                "  {:<13} {}\n",
                format!("{}:", label),
                settings.format_date(date)
            ));
        }
    }

    output
}
