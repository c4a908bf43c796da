//! Rule-based savings advice

use std::fmt;

use crate::config::DEFAULT_CURRENCY_SYMBOL;
use crate::models::Expense;

/// Share of the largest discretionary expense suggested as a cut
pub const SUGGESTED_CUT_RATE: f64 = 0.1;

/// A suggested reduction of one expense
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingCut {
    pub expense_name: String,
    pub amount: f64,
}

/// Advice derived from the monthly balance
#[derive(Debug, Clone, PartialEq)]
pub enum SavingsAdvice {
    /// Expenses meet or exceed income
    ReviewSpending,
    /// Income exceeds expenses
    Surplus {
        surplus: f64,
        /// `None` when there is no discretionary expense to cut
        suggestion: Option<SpendingCut>,
    },
}

impl SavingsAdvice {
    /// Render the advice with a currency symbol suffix
    pub fn message(&self, currency: &str) -> String {
        match self {
            Self::ReviewSpending => "Your expenses currently exceed or match your income. \
                 Review your spending for potential cuts."
                .to_string(),
            Self::Surplus {
                surplus,
                suggestion,
            } => {
                let mut advice = format!(
                    "You have a monthly surplus of {:.2}{}. Good job! ",
                    surplus, currency
                );
                match suggestion {
                    Some(cut) => advice.push_str(&format!(
                        "Consider reducing your spending on \"{}\" by {:.2}{} to save even more.",
                        cut.expense_name, cut.amount, currency
                    )),
                    None => advice
                        .push_str("Keep track of your spending to maintain this positive trend."),
                }
                advice
            }
        }
    }
}

impl fmt::Display for SavingsAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// Largest variable/other/subscription expense by amount; first wins on ties
fn largest_discretionary(expenses: &[Expense]) -> Option<&Expense> {
    expenses
        .iter()
        .filter(|e| e.category.is_discretionary())
        .fold(None, |best: Option<&Expense>, e| match best {
            Some(b) if e.amount <= b.amount => Some(b),
            _ => Some(e),
        })
}

pub fn savings_advice(
    monthly_income: f64,
    monthly_expenses: f64,
    expenses: &[Expense],
) -> SavingsAdvice {
    let surplus = monthly_income - monthly_expenses;

    if surplus.is_nan() || surplus <= 0.0 {
        return SavingsAdvice::ReviewSpending;
    }

    let suggestion = largest_discretionary(expenses).map(|e| SpendingCut {
        expense_name: e.name.clone(),
        amount: e.amount * SUGGESTED_CUT_RATE,
    });

    SavingsAdvice::Surplus {
        surplus,
        suggestion,
    }
}

/// Advice as text, with the default currency symbol
pub fn get_savings_advice(monthly_income: f64, monthly_expenses: f64, expenses: &[Expense]) -> String {
    savings_advice(monthly_income, monthly_expenses, expenses).to_string()
}
