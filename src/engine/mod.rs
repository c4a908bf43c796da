//! Calculation engine
//!
//! Pure functions over the domain collections. Nothing here reads storage
//! or keeps state between calls; the only source of nondeterminism, the
//! investment simulator's daily draw, is passed in as a [`RandomSource`].

pub mod advice;
pub mod investment;
pub mod projection;
pub mod random;
pub mod totals;

pub use advice::{get_savings_advice, savings_advice, SavingsAdvice, SpendingCut};
pub use investment::{
    calculate_investment_profit_loss, simulate_investment_current_value,
    simulate_investment_value_at, DriftProfile,
};
pub use projection::{project_financial_goal, GoalProjection, MonthsToGoal};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use totals::{
    calculate_total_monthly_expenses, calculate_total_monthly_income, monthly_contribution,
};
