//! Income service
//!
//! Provides business logic for managing monthly income sources.

use chrono::NaiveDate;

use crate::engine::calculate_total_monthly_income;
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{IncomeCategory, IncomeId, IncomeSource};
use crate::storage::StorageGateway;

use super::{find_record, load_for_update};

/// Fields to change on an existing income source
#[derive(Debug, Clone, Default)]
pub struct IncomeEdit {
    pub name: Option<String>,
    pub category: Option<IncomeCategory>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
}

/// Service for income source management
pub struct IncomeService<'a> {
    gateway: &'a StorageGateway,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(gateway: &'a StorageGateway) -> Self {
        Self { gateway }
    }

    /// All income sources in stored order
    pub fn list(&self) -> Vec<IncomeSource> {
        self.gateway.load_collection()
    }

    pub fn get(&self, id: IncomeId) -> Option<IncomeSource> {
        self.list().into_iter().find(|i| i.id == id)
    }

    /// Find an income source by name or ID string
    pub fn find(&self, identifier: &str) -> Option<IncomeSource> {
        find_record(self.list(), identifier, |i| i.name.as_str(), |i, s| i.id.matches(s))
    }

    /// Validate and append a new income source
    pub fn add(&self, mut income: IncomeSource) -> BudgetWiseResult<IncomeSource> {
        income.name = income.name.trim().to_string();
        income
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let mut incomes: Vec<IncomeSource> = load_for_update(self.gateway)?;
        incomes.push(income.clone());
        self.gateway.save_collection(&incomes);

        tracing::debug!(id = %income.id, name = %income.name, "Added income source");
        Ok(income)
    }

    /// Apply an edit to an existing income source
    pub fn update(&self, id: IncomeId, edit: IncomeEdit) -> BudgetWiseResult<IncomeSource> {
        let mut incomes: Vec<IncomeSource> = load_for_update(self.gateway)?;
        let income = incomes
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BudgetWiseError::income_not_found(id.to_string()))?;

        if let Some(name) = edit.name {
            income.name = name.trim().to_string();
        }
        if let Some(category) = edit.category {
            income.category = category;
        }
        if let Some(amount) = edit.amount {
            income.amount = amount;
        }
        if let Some(date) = edit.date {
            income.date = Some(date);
        }

        income
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let updated = income.clone();
        self.gateway.save_collection(&incomes);

        tracing::debug!(id = %updated.id, "Updated income source");
        Ok(updated)
    }

    /// Remove an income source; returns whether anything was removed
    pub fn remove(&self, id: IncomeId) -> BudgetWiseResult<bool> {
        let mut incomes: Vec<IncomeSource> = load_for_update(self.gateway)?;
        let before = incomes.len();
        incomes.retain(|i| i.id != id);

        if incomes.len() == before {
            return Ok(false);
        }

        self.gateway.save_collection(&incomes);
        tracing::debug!(id = %id, "Removed income source");
        Ok(true)
    }

    /// Total monthly income across all sources
    pub fn total_monthly(&self) -> f64 {
        calculate_total_monthly_income(&self.list())
    }
}
