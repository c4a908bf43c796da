//! Goal Report
//!
//! Progress and completion projection for every financial goal.

use crate::config::Settings;
use crate::engine::{project_financial_goal, GoalProjection};
use crate::models::FinancialGoal;

const PROGRESS_BAR_WIDTH: usize = 20;

/// Progress and projection of a single goal
#[derive(Debug, Clone)]
pub struct GoalStatus {
    pub goal: FinancialGoal,
    pub progress_percent: f64,
    pub projection: GoalProjection,
}

impl GoalStatus {
    /// Fixed-width text bar, full at 100% and beyond
    pub fn progress_bar(&self) -> String {
        let ratio = (self.progress_percent / 100.0).clamp(0.0, 1.0);
        let filled = (ratio * PROGRESS_BAR_WIDTH as f64).round() as usize;
        format!(
            "[{}{}]",
            "#".repeat(filled),
            "-".repeat(PROGRESS_BAR_WIDTH - filled)
        )
    }
}

/// Goal Report
#[derive(Debug, Clone)]
pub struct GoalReport {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub goals: Vec<GoalStatus>,
}

impl GoalReport {
    /// Project every goal against the given monthly totals
    pub fn build(monthly_income: f64, monthly_expenses: f64, goals: &[FinancialGoal]) -> Self {
        let goals = goals
            .iter()
            .map(|goal| GoalStatus {
                goal: goal.clone(),
                progress_percent: goal.progress_percent(),
                projection: project_financial_goal(monthly_income, monthly_expenses, goal, 0.0),
            })
            .collect();

        Self {
            monthly_income,
            monthly_expenses,
            goals,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str("Financial Goals\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');

        if self.goals.is_empty() {
            output.push_str("No financial goals set.\n");
            return output;
        }

        for status in &self.goals {
            let goal = &status.goal;
            output.push_str(&format!("\n{} ({})\n", goal.name, goal.priority));
            output.push_str(&format!(
                "  Saved:    {} of {}\n",
                settings.format_amount(goal.current_amount),
                settings.format_amount(goal.target_amount)
            ));
            output.push_str(&format!(
                "  Progress: {} {:.1}%\n",
                status.progress_bar(),
                status.progress_percent
            ));
            if let Some(date) = goal.target_date {
                output.push_str(&format!(
                    "  Target:   {}\n",
                    settings.format_date(date)
                ));
            }
            output.push_str(&format!(
                "  Months to goal: {} (saving {}/month)\n",
                status.projection.months_to_goal,
                settings.format_amount(status.projection.projected_monthly_savings)
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MonthsToGoal;

    #[test]
    fn test_build() {
        let goals = vec![
            FinancialGoal::new("Vacation", 2400.0),
            FinancialGoal::new("Laptop", 1000.0).with_current_amount(250.0),
        ];
        let report = GoalReport::build(2000.0, 1600.0, &goals);

        assert_eq!(report.goals.len(), 2);
        assert_eq!(report.goals[0].progress_percent, 0.0);
        assert_eq!(report.goals[0].projection.months_to_goal, MonthsToGoal::Months(6));
        assert_eq!(report.goals[1].progress_percent, 25.0);
        // 750 remaining at 400/month
        assert_eq!(report.goals[1].projection.months_to_goal, MonthsToGoal::Months(2));
    }

    #[test]
    fn test_progress_bar() {
        let goals = vec![
            FinancialGoal::new("Half", 100.0).with_current_amount(50.0),
            FinancialGoal::new("Over", 100.0).with_current_amount(150.0),
        ];
        let report = GoalReport::build(0.0, 0.0, &goals);

        assert_eq!(report.goals[0].progress_bar(), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(report.goals[1].progress_bar(), format!("[{}]", "#".repeat(20)));
        assert_eq!(report.goals[1].progress_percent, 150.0);
    }

    #[test]
    fn test_format_terminal() {
        let goals = vec![FinancialGoal::new("Vacation", 2400.0)];
        let output = GoalReport::build(1500.0, 1600.0, &goals).format_terminal(&Settings::default());

        assert!(output.contains("Vacation (Medium)"));
        assert!(output.contains("0.00 € of 2400.00 €"));
        assert!(output.contains("N/A (Savings are not positive)"));
        assert!(output.contains("-100.00 €/month"));
    }

    #[test]
    fn test_format_terminal_empty() {
        let output = GoalReport::build(0.0, 0.0, &[]).format_terminal(&Settings::default());
        assert!(output.contains("No financial goals set."));
    }
}
