//! Expense model
//!
//! Covers bills, subscriptions and day-to-day spending. Each expense carries
//! an optional payment frequency used to derive its monthly-equivalent cost.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::dates::iso_date_opt;
use super::ids::ExpenseId;

/// Kind of expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Fixed,
    Subscription,
    #[default]
    Variable,
    Other,
}

impl ExpenseCategory {
    /// Parse expense category from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "bill" => Some(Self::Fixed),
            "subscription" | "sub" => Some(Self::Subscription),
            "variable" => Some(Self::Variable),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Whether spending in this category can reasonably be cut back
    pub fn is_discretionary(&self) -> bool {
        matches!(self, Self::Variable | Self::Other | Self::Subscription)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Subscription => write!(f, "Subscription"),
            Self::Variable => write!(f, "Variable"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// How often an expense is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Parse frequency from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "once" | "one-off" | "oneoff" => Some(Self::Once),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" | "annual" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Once => write!(f, "Once"),
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// Unknown frequency strings in stored data read back as `None` instead of
/// failing the whole collection.
fn lenient_frequency<'de, D>(deserializer: D) -> Result<Option<Frequency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Frequency::parse))
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// An expense or subscription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub category: ExpenseCategory,
    pub amount: f64,

    /// Absent means the expense does not count towards monthly totals
    #[serde(
        default,
        deserialize_with = "lenient_frequency",
        skip_serializing_if = "Option::is_none"
    )]
    pub frequency: Option<Frequency>,

    /// When the bill is due
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// When it was actually paid
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,

    /// Next renewal, for subscriptions
    #[serde(default, with = "iso_date_opt", skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<NaiveDate>,

    /// e.g. Netflix, Spotify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        category: ExpenseCategory,
        amount: f64,
        frequency: Option<Frequency>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            category,
            amount,
            frequency,
            due_date: None,
            payment_date: None,
            renewal_date: None,
            service_provider: None,
        }
    }

    /// Create a monthly expense
    pub fn monthly(name: impl Into<String>, category: ExpenseCategory, amount: f64) -> Self {
        Self::new(name, category, amount, Some(Frequency::Monthly))
    }

    pub fn is_subscription(&self) -> bool {
        self.category == ExpenseCategory::Subscription
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_monthly_constructor() {
        let rent = Expense::monthly("Rent", ExpenseCategory::Fixed, 1000.0);
        assert_eq!(rent.frequency, Some(Frequency::Monthly));
        assert!(!rent.is_subscription());
        assert!(rent.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let e = Expense::monthly("", ExpenseCategory::Fixed, 10.0);
        assert_eq!(e.validate(), Err(ExpenseValidationError::EmptyName));

        let e = Expense::monthly("Gym", ExpenseCategory::Subscription, -5.0);
        assert_eq!(e.validate(), Err(ExpenseValidationError::NonPositiveAmount));
    }

    #[test]
    fn test_discretionary_categories() {
        assert!(!ExpenseCategory::Fixed.is_discretionary());
        assert!(ExpenseCategory::Variable.is_discretionary());
        assert!(ExpenseCategory::Other.is_discretionary());
        assert!(ExpenseCategory::Subscription.is_discretionary());
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(Frequency::parse("Weekly"), Some(Frequency::Weekly));
        assert_eq!(Frequency::parse("annual"), Some(Frequency::Yearly));
        assert_eq!(Frequency::parse("fortnightly"), None);
    }

    #[test]
    fn test_missing_frequency_reads_as_none() {
        let json = format!(
            r#"{{"id":"{}","name":"Gift","category":"other","amount":50}}"#,
            ID
        );
        let expense: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.frequency, None);
    }

    #[test]
    fn test_unknown_frequency_reads_as_none() {
        let json = format!(
            r#"{{"id":"{}","name":"Gift","category":"other","amount":50,"frequency":"variable"}}"#,
            ID
        );
        let expense: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense.frequency, None);
    }

    #[test]
    fn test_subscription_fields_round_trip() {
        let mut netflix = Expense::monthly("Netflix", ExpenseCategory::Subscription, 12.99);
        netflix.service_provider = Some("Netflix".into());
        netflix.renewal_date = NaiveDate::from_ymd_opt(2025, 1, 15);

        let value = serde_json::to_value(&netflix).unwrap();
        assert_eq!(value["serviceProvider"], "Netflix");
        assert_eq!(value["renewalDate"], "2025-01-15");
        assert_eq!(value["frequency"], "monthly");
        assert!(value.get("dueDate").is_none());

        let back: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(back, netflix);
    }
}
