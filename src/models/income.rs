//! Income source model
//!
//! An income source is a named, already-monthly amount such as a salary or
//! rental income.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::dates::iso_date_opt;
use super::ids::IncomeId;

/// Kind of income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    #[default]
    Salary,
    Freelance,
    Rent,
    Investment,
    Other,
}

impl IncomeCategory {
    /// Parse income category from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "salary" | "wage" | "wages" => Some(Self::Salary),
            "freelance" => Some(Self::Freelance),
            "rent" | "rental" => Some(Self::Rent),
            "investment" | "investments" => Some(Self::Investment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Salary => write!(f, "Salary"),
            Self::Freelance => write!(f, "Freelance"),
            Self::Rent => write!(f, "Rent"),
            Self::Investment => write!(f, "Investment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Income name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// A recurring monthly income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: IncomeId,
    pub name: String,
    pub category: IncomeCategory,
    /// Monthly amount
    pub amount: f64,
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>, category: IncomeCategory, amount: f64) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            category,
            amount,
            date: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeValidationError::EmptyName);
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}
