//! Expense service
//!
//! Provides business logic for expenses and subscriptions.

use chrono::NaiveDate;

use crate::engine::calculate_total_monthly_expenses;
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Frequency};
use crate::storage::StorageGateway;

use super::{find_record, load_for_update};

/// Fields to change on an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseEdit {
    pub name: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub amount: Option<f64>,
    pub frequency: Option<Frequency>,
    pub due_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub renewal_date: Option<NaiveDate>,
    pub service_provider: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    gateway: &'a StorageGateway,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(gateway: &'a StorageGateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self) -> Vec<Expense> {
        self.gateway.load_collection()
    }

    /// Only the subscription-category expenses
    pub fn subscriptions(&self) -> Vec<Expense> {
        self.list()
            .into_iter()
            .filter(Expense::is_subscription)
            .collect()
    }

    pub fn get(&self, id: ExpenseId) -> Option<Expense> {
        self.list().into_iter().find(|e| e.id == id)
    }

    /// Find an expense by name or ID string
    pub fn find(&self, identifier: &str) -> Option<Expense> {
        find_record(self.list(), identifier, |e| e.name.as_str(), |e, s| e.id.matches(s))
    }

    /// Validate and append a new expense
    pub fn add(&self, mut expense: Expense) -> BudgetWiseResult<Expense> {
        expense.name = expense.name.trim().to_string();
        expense
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let mut expenses: Vec<Expense> = load_for_update(self.gateway)?;
        expenses.push(expense.clone());
        self.gateway.save_collection(&expenses);

        tracing::debug!(id = %expense.id, name = %expense.name, "Added expense");
        Ok(expense)
    }

    /// Apply an edit to an existing expense
    pub fn update(&self, id: ExpenseId, edit: ExpenseEdit) -> BudgetWiseResult<Expense> {
        let mut expenses: Vec<Expense> = load_for_update(self.gateway)?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| BudgetWiseError::expense_not_found(id.to_string()))?;

        if let Some(name) = edit.name {
            expense.name = name.trim().to_string();
        }
        if let Some(category) = edit.category {
            expense.category = category;
        }
        if let Some(amount) = edit.amount {
            expense.amount = amount;
        }
        if let Some(frequency) = edit.frequency {
            expense.frequency = Some(frequency);
        }
        if let Some(date) = edit.due_date {
            expense.due_date = Some(date);
        }
        if let Some(date) = edit.payment_date {
            expense.payment_date = Some(date);
        }
        if let Some(date) = edit.renewal_date {
            expense.renewal_date = Some(date);
        }
        if let Some(provider) = edit.service_provider {
            let provider = provider.trim();
            expense.service_provider = (!provider.is_empty()).then(|| provider.to_string());
        }

        expense
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let updated = expense.clone();
        self.gateway.save_collection(&expenses);

        tracing::debug!(id = %updated.id, "Updated expense");
        Ok(updated)
    }

    /// Remove an expense; returns whether anything was removed
    pub fn remove(&self, id: ExpenseId) -> BudgetWiseResult<bool> {
        let mut expenses: Vec<Expense> = load_for_update(self.gateway)?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);

        if expenses.len() == before {
            return Ok(false);
        }

        self.gateway.save_collection(&expenses);
        tracing::debug!(id = %id, "Removed expense");
        Ok(true)
    }

    /// Monthly-equivalent total of all expenses
    pub fn total_monthly(&self) -> f64 {
        calculate_total_monthly_expenses(&self.list())
    }
}
