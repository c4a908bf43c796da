//! Monthly income and expense totals

use crate::models::{round_to_cents, Expense, Frequency, IncomeSource};

/// Approximation used to turn weekly amounts into monthly ones
pub const WEEKS_PER_MONTH: f64 = 4.0;
/// Approximation used to turn daily amounts into monthly ones
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly-equivalent contribution of a single expense
///
/// One-off expenses and expenses without a frequency contribute nothing,
/// whatever their payment date.
pub fn monthly_contribution(expense: &Expense) -> f64 {
    match expense.frequency {
        Some(Frequency::Monthly) => expense.amount,
        Some(Frequency::Yearly) => expense.amount / MONTHS_PER_YEAR,
        Some(Frequency::Weekly) => expense.amount * WEEKS_PER_MONTH,
        Some(Frequency::Daily) => expense.amount * DAYS_PER_MONTH,
        Some(Frequency::Once) => 0.0,
        None => 0.0,
    }
}

/// Sum of monthly-equivalent contributions, rounded to cents
pub fn calculate_total_monthly_expenses(expenses: &[Expense]) -> f64 {
    let total: f64 = expenses.iter().map(monthly_contribution).sum();
    round_to_cents(total)
}

/// Sum of income amounts; each amount is already monthly
pub fn calculate_total_monthly_income(income_sources: &[IncomeSource]) -> f64 {
    income_sources.iter().map(|income| income.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeCategory};

    fn expense(amount: f64, category: ExpenseCategory, frequency: Option<Frequency>) -> Expense {
        Expense::new("test", category, amount, frequency)
    }

    #[test]
    fn test_mixed_frequencies() {
        let expenses = vec![
            expense(1000.0, ExpenseCategory::Fixed, Some(Frequency::Monthly)),
            expense(100.0, ExpenseCategory::Variable, Some(Frequency::Weekly)),
            expense(600.0, ExpenseCategory::Fixed, Some(Frequency::Yearly)),
            expense(5.0, ExpenseCategory::Variable, Some(Frequency::Daily)),
            expense(10.0, ExpenseCategory::Subscription, Some(Frequency::Monthly)),
            expense(100.0, ExpenseCategory::Other, Some(Frequency::Once)),
        ];

        // 1000 + 400 + 50 + 150 + 10
        assert_eq!(calculate_total_monthly_expenses(&expenses), 1610.0);
    }

    #[test]
    fn test_empty_expenses() {
        assert_eq!(calculate_total_monthly_expenses(&[]), 0.0);
    }

    #[test]
    fn test_contributions_per_frequency() {
        let c = ExpenseCategory::Fixed;
        assert_eq!(monthly_contribution(&expense(120.0, c, Some(Frequency::Monthly))), 120.0);
        assert_eq!(monthly_contribution(&expense(120.0, c, Some(Frequency::Yearly))), 10.0);
        assert_eq!(monthly_contribution(&expense(120.0, c, Some(Frequency::Weekly))), 480.0);
        assert_eq!(monthly_contribution(&expense(2.0, c, Some(Frequency::Daily))), 60.0);
        assert_eq!(monthly_contribution(&expense(120.0, c, Some(Frequency::Once))), 0.0);
        assert_eq!(monthly_contribution(&expense(120.0, c, None)), 0.0);
    }

    #[test]
    fn test_once_excluded_even_when_paid_this_month() {
        let mut one_off = expense(300.0, ExpenseCategory::Other, Some(Frequency::Once));
        one_off.payment_date = Some(chrono::Local::now().date_naive());
        assert_eq!(calculate_total_monthly_expenses(&[one_off]), 0.0);
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let expenses = vec![expense(100.0, ExpenseCategory::Fixed, Some(Frequency::Yearly))];
        assert_eq!(calculate_total_monthly_expenses(&expenses), 8.33);
    }

    #[test]
    fn test_total_monthly_income() {
        let incomes = vec![
            IncomeSource::new("Salary", IncomeCategory::Salary, 3000.0),
            IncomeSource::new("Freelance", IncomeCategory::Freelance, 500.0),
        ];
        assert_eq!(calculate_total_monthly_income(&incomes), 3500.0);
        assert_eq!(calculate_total_monthly_income(&[]), 0.0);
    }
}
