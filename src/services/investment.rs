//! Investment service
//!
//! Owns the current-value lifecycle of investments: values are simulated
//! when an investment is added or refreshed, filled in when loaded without
//! one, and can be overridden by the user.

use chrono::{Local, NaiveDate};

use crate::engine::{simulate_investment_current_value, RandomSource};
use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{IncomeId, IncomeSource, Investment, InvestmentId};
use crate::storage::StorageGateway;

use super::{find_record, load_for_update};

/// Fields to change on an existing investment
#[derive(Debug, Clone, Default)]
pub struct InvestmentEdit {
    pub name: Option<String>,
    pub initial_amount: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub symbol: Option<String>,
    pub shares: Option<f64>,
    /// `Some(None)` unlinks the income source
    pub linked_income_id: Option<Option<IncomeId>>,
}

/// Service for investment management
pub struct InvestmentService<'a> {
    gateway: &'a StorageGateway,
}

impl<'a> InvestmentService<'a> {
    /// Create a new investment service
    pub fn new(gateway: &'a StorageGateway) -> Self {
        Self { gateway }
    }

    /// Investments exactly as stored
    pub fn list(&self) -> Vec<Investment> {
        self.gateway.load_collection()
    }

    /// Investments with a usable current value
    ///
    /// Any investment stored without a positive current value gets a
    /// simulated one, and the filled-in collection is saved back. Stored
    /// data that cannot be read yields an empty list and is left untouched.
    pub fn load_valued<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<Investment> {
        let Some(mut investments) = self.gateway.load_collection_for_update::<Investment>() else {
            return Vec::new();
        };
        let mut filled = 0usize;

        for investment in investments.iter_mut().filter(|i| !i.has_current_value()) {
            let value = simulate_investment_current_value(
                investment.initial_amount,
                investment.start_date,
                &investment.name,
                rng,
            );
            investment.set_current_value(value);
            filled += 1;
        }

        if filled > 0 {
            self.gateway.save_collection(&investments);
            tracing::debug!(count = filled, "Simulated missing investment values");
        }

        investments
    }

    pub fn get(&self, id: InvestmentId) -> Option<Investment> {
        self.list().into_iter().find(|i| i.id == id)
    }

    /// Find an investment by name or ID string
    pub fn find(&self, identifier: &str) -> Option<Investment> {
        find_record(self.list(), identifier, |i| i.name.as_str(), |i, s| i.id.matches(s))
    }

    /// Validate and append a new investment
    ///
    /// A positive current value on `investment` is kept as user-supplied.
    /// Otherwise an investment starting today is valued at its initial
    /// amount, and an older one gets a simulated value.
    pub fn add<R: RandomSource + ?Sized>(
        &self,
        mut investment: Investment,
        rng: &mut R,
    ) -> BudgetWiseResult<Investment> {
        investment.name = investment.name.trim().to_string();
        if investment.current_value.is_nan() {
            investment.current_value = 0.0;
        }
        investment
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        if !investment.has_current_value() {
            let today = Local::now().date_naive();
            let value = if investment.start_date == today {
                investment.initial_amount
            } else {
                simulate_investment_current_value(
                    investment.initial_amount,
                    investment.start_date,
                    &investment.name,
                    rng,
                )
            };
            investment.set_current_value(value);
        }

        let mut investments: Vec<Investment> = load_for_update(self.gateway)?;
        investments.push(investment.clone());
        self.gateway.save_collection(&investments);

        tracing::debug!(
            id = %investment.id,
            name = %investment.name,
            current_value = investment.current_value,
            "Added investment"
        );
        Ok(investment)
    }

    /// Apply an edit to an existing investment
    ///
    /// The current value is left alone; refresh or set it explicitly.
    pub fn update(&self, id: InvestmentId, edit: InvestmentEdit) -> BudgetWiseResult<Investment> {
        self.modify(id, |investment| {
            if let Some(name) = edit.name {
                investment.name = name.trim().to_string();
            }
            if let Some(amount) = edit.initial_amount {
                investment.initial_amount = amount;
            }
            if let Some(date) = edit.start_date {
                investment.start_date = date;
            }
            if let Some(symbol) = edit.symbol {
                let symbol = symbol.trim();
                investment.symbol = (!symbol.is_empty()).then(|| symbol.to_uppercase());
            }
            if let Some(shares) = edit.shares {
                investment.shares = Some(shares);
            }
            if let Some(link) = edit.linked_income_id {
                investment.linked_income_id = link;
            }
            Ok(())
        })
    }

    /// Re-simulate one investment's current value
    pub fn refresh<R: RandomSource + ?Sized>(
        &self,
        id: InvestmentId,
        rng: &mut R,
    ) -> BudgetWiseResult<Investment> {
        self.modify(id, |investment| {
            let value = simulate_investment_current_value(
                investment.initial_amount,
                investment.start_date,
                &investment.name,
                rng,
            );
            investment.set_current_value(value);
            Ok(())
        })
    }

    /// Re-simulate every investment's current value
    pub fn refresh_all<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> BudgetWiseResult<Vec<Investment>> {
        let mut investments: Vec<Investment> = load_for_update(self.gateway)?;
        for investment in &mut investments {
            let value = simulate_investment_current_value(
                investment.initial_amount,
                investment.start_date,
                &investment.name,
                rng,
            );
            investment.set_current_value(value);
        }

        self.gateway.save_collection(&investments);
        tracing::debug!(count = investments.len(), "Refreshed investment values");
        Ok(investments)
    }

    /// Record a user-confirmed current value
    pub fn set_value(&self, id: InvestmentId, value: f64) -> BudgetWiseResult<Investment> {
        if value.is_nan() || value < 0.0 {
            return Err(BudgetWiseError::Validation(
                "Current value cannot be negative".into(),
            ));
        }

        self.modify(id, |investment| {
            investment.set_current_value(value);
            Ok(())
        })
    }

    /// Remove an investment; returns whether anything was removed
    pub fn remove(&self, id: InvestmentId) -> BudgetWiseResult<bool> {
        let mut investments: Vec<Investment> = load_for_update(self.gateway)?;
        let before = investments.len();
        investments.retain(|i| i.id != id);

        if investments.len() == before {
            return Ok(false);
        }

        self.gateway.save_collection(&investments);
        tracing::debug!(id = %id, "Removed investment");
        Ok(true)
    }

    fn modify(
        &self,
        id: InvestmentId,
        change: impl FnOnce(&mut Investment) -> BudgetWiseResult<()>,
    ) -> BudgetWiseResult<Investment> {
        let mut investments: Vec<Investment> = load_for_update(self.gateway)?;
        let investment = investments
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BudgetWiseError::investment_not_found(id.to_string()))?;

        change(investment)?;
        investment
            .validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let updated = investment.clone();
        self.gateway.save_collection(&investments);

        tracing::debug!(id = %updated.id, current_value = updated.current_value, "Updated investment");
        Ok(updated)
    }
}

/// Name of the income source an investment is linked to
///
/// `None` when the investment has no link or the linked source no longer
/// exists.
pub fn linked_income_name<'b>(
    investment: &Investment,
    incomes: &'b [IncomeSource],
) -> Option<&'b str> {
    let linked = investment.linked_income_id?;
    incomes
        .iter()
        .find(|i| i.id == linked)
        .map(|i| i.name.as_str())
}
