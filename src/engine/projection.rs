//! Goal-completion projection

use serde::Serialize;
use std::fmt;

use crate::models::FinancialGoal;

/// Months needed to reach a goal at the current saving rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthsToGoal {
    Months(u64),
    /// Monthly savings are zero or negative, so the goal is never reached
    NotApplicable,
}

impl MonthsToGoal {
    pub fn months(&self) -> Option<u64> {
        match self {
            Self::Months(n) => Some(*n),
            Self::NotApplicable => None,
        }
    }
}

impl fmt::Display for MonthsToGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{}", n),
            Self::NotApplicable => write!(f, "N/A (Savings are not positive)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProjection {
    pub months_to_goal: MonthsToGoal,
    pub projected_monthly_savings: f64,
}

/// Project how many months of saving `income - expenses` it takes to reach
/// the goal.
///
/// `current_savings` overrides the goal's own saved amount; zero means "use
/// the goal's amount". Without positive savings there is no projection, even
/// for a goal that is already met; otherwise a met goal needs 0 months.
pub fn project_financial_goal(
    monthly_income: f64,
    monthly_expenses: f64,
    goal: &FinancialGoal,
    current_savings: f64,
) -> GoalProjection {
    let projected_monthly_savings = monthly_income - monthly_expenses;

    let saved = if current_savings != 0.0 && !current_savings.is_nan() {
        current_savings
    } else {
        goal.current_amount
    };
    let remaining = goal.target_amount - saved;

    let months_to_goal = if projected_monthly_savings.is_nan() || projected_monthly_savings <= 0.0 {
        MonthsToGoal::NotApplicable
    } else if remaining <= 0.0 {
        MonthsToGoal::Months(0)
    } else {
        MonthsToGoal::Months((remaining / projected_monthly_savings).ceil() as u64)
    };

    GoalProjection {
        months_to_goal,
        projected_monthly_savings,
    }
}
