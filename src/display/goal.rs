//! Goal display formatting

use tabled::Tabled;

use super::{optional_date, render_table};
use crate::config::Settings;
use crate::reports::{GoalReport, GoalStatus};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Months Left")]
    months: String,
    #[tabled(rename = "Target Date")]
    target_date: String,
}

/// Format goals as a table
pub fn format_goal_list(report: &GoalReport, settings: &Settings) -> String {
    if report.goals.is_empty() {
        return "No financial goals set.\n".to_string();
    }

    let rows = report
        .goals
        .iter()
        .map(|status| GoalRow {
            id: status.goal.id.to_string(),
            name: status.goal.name.clone(),
            priority: status.goal.priority.to_string(),
            saved: settings.format_amount(status.goal.current_amount),
            target: settings.format_amount(status.goal.target_amount),
            progress: format!("{:.1}%", status.progress_percent),
            months: status.projection.months_to_goal.to_string(),
            target_date: optional_date(settings, status.goal.target_date),
        })
        .collect();

    let mut output = render_table(rows);
    output.push_str(&format!(
        "Projected Monthly Savings: {}\n",
        settings.format_amount(report.monthly_income - report.monthly_expenses)
    ));
    output
}

pub fn format_goal_details(status: &GoalStatus, settings: &Settings) -> String {
    let goal = &status.goal;
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", goal.name));
    output.push_str(&format!("  ID:        {}\n", goal.id));
    output.push_str(&format!("  Priority:  {}\n", goal.priority));
    output.push_str(&format!(
        "  Saved:     {}\n",
        settings.format_amount(goal.current_amount)
    ));
    output.push_str(&format!(
        "  Target:    {}\n",
        settings.format_amount(goal.target_amount)
    ));
    output.push_str(&format!(
        "  Progress:  {} {:.1}%\n",
        status.progress_bar(),
        status.progress_percent
    ));
    output.push_str(&format!(
        "  Projected Months to Reach Goal: {}\n",
        status.projection.months_to_goal
    ));
    if let Some(date) = goal.target_date {
        output.push_str(&format!("  Target Date: {}\n", settings.format_date(date)));
    }
    if let Some(description) = &goal.description {
        output.push_str(&format!("  Notes: {}\n", description));
    }

    output
}
