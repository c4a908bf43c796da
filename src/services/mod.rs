//! Service layer for BudgetWise
//!
//! The service layer provides business logic on top of the storage gateway,
//! handling validation, lookups and the investment value lifecycle.

pub mod expense;
pub mod goal;
pub mod income;
pub mod investment;

pub use expense::{ExpenseEdit, ExpenseService};
pub use goal::{GoalEdit, GoalService};
pub use income::{IncomeEdit, IncomeService};
pub use investment::{linked_income_name, InvestmentEdit, InvestmentService};

use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::storage::{StorageGateway, StoredCollection};

/// Load a collection that is about to be saved back
///
/// Stored data that cannot be read is left untouched and the change is
/// refused, instead of replacing the collection with only the new records.
pub(crate) fn load_for_update<T: StoredCollection>(
    gateway: &StorageGateway,
) -> BudgetWiseResult<Vec<T>> {
    gateway.load_collection_for_update().ok_or_else(|| {
        BudgetWiseError::Storage(format!(
            "Stored data under '{}' could not be read; refusing to overwrite it",
            T::KEY
        ))
    })
}

/// Locate a record by case-insensitive name, falling back to its full or
/// short display ID
pub(crate) fn find_record<T>(
    records: Vec<T>,
    identifier: &str,
    name: impl Fn(&T) -> &str,
    id_matches: impl Fn(&T, &str) -> bool,
) -> Option<T> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    let by_name = records
        .iter()
        .position(|r| name(r).eq_ignore_ascii_case(identifier));
    let index = by_name.or_else(|| records.iter().position(|r| id_matches(r, identifier)))?;

    records.into_iter().nth(index)
}
