//! Investment model
//!
//! An investment has a fixed initial amount and a current value that is
//! either simulated or confirmed by the user. It may point at the income
//! source that funds it; that link is weak and may dangle after the income
//! is removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates::iso_date;
use super::ids::{IncomeId, InvestmentId};

/// Validation errors for investments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    EmptyName,
    NonPositiveInitialAmount,
    NegativeCurrentValue,
    NegativeShares,
}

impl fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Investment name cannot be empty"),
            Self::NonPositiveInitialAmount => write!(f, "Initial amount must be positive"),
            Self::NegativeCurrentValue => write!(f, "Current value cannot be negative"),
            Self::NegativeShares => write!(f, "Number of shares cannot be negative"),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

/// A tracked investment position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: InvestmentId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_income_id: Option<IncomeId>,

    pub initial_amount: f64,

    /// Zero when never simulated or confirmed
    #[serde(default)]
    pub current_value: f64,

    #[serde(with = "iso_date")]
    pub start_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<f64>,
}

impl Investment {
    /// Create a new investment valued at its initial amount
    pub fn new(name: impl Into<String>, initial_amount: f64, start_date: NaiveDate) -> Self {
        Self {
            id: InvestmentId::new(),
            name: name.into(),
            linked_income_id: None,
            initial_amount,
            current_value: initial_amount,
            start_date,
            symbol: None,
            shares: None,
        }
    }

    /// Set the current value, clamping negatives (and NaN) to zero
    pub fn set_current_value(&mut self, value: f64) {
        self.current_value = value.max(0.0);
    }

    /// Whether the stored current value is usable as-is
    pub fn has_current_value(&self) -> bool {
        self.current_value.is_finite() && self.current_value > 0.0
    }

    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(InvestmentValidationError::EmptyName);
        }
        if self.initial_amount.is_nan() || self.initial_amount <= 0.0 {
            return Err(InvestmentValidationError::NonPositiveInitialAmount);
        }
        if self.current_value.is_nan() || self.current_value < 0.0 {
            return Err(InvestmentValidationError::NegativeCurrentValue);
        }
        if let Some(shares) = self.shares {
            if shares.is_nan() || shares < 0.0 {
                return Err(InvestmentValidationError::NegativeShares);
            }
        }
        Ok(())
    }
}
