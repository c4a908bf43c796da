//! Goal service
//!
//! Provides business logic for savings goals and contributions towards them.

use chrono::NaiveDate;

use crate::error::{BudgetWiseError, BudgetWiseResult};
use crate::models::{FinancialGoal, GoalId, GoalPriority};
use crate::storage::StorageGateway;

use super::{find_record, load_for_update};

/// Fields to change on an existing goal
#[derive(Debug, Clone, Default)]
pub struct GoalEdit {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub priority: Option<GoalPriority>,
    pub description: Option<String>,
}

/// Service for financial goal management
pub struct GoalService<'a> {
    gateway: &'a StorageGateway,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(gateway: &'a StorageGateway) -> Self {
        Self { gateway }
    }

    pub fn list(&self) -> Vec<FinancialGoal> {
        self.gateway.load_collection()
    }

    pub fn get(&self, id: GoalId) -> Option<FinancialGoal> {
        self.list().into_iter().find(|g| g.id == id)
    }

    /// Find a goal by name or ID string
    pub fn find(&self, identifier: &str) -> Option<FinancialGoal> {
        find_record(self.list(), identifier, |g| g.name.as_str(), |g, s| g.id.matches(s))
    }

    /// Validate and append a new goal
    pub fn add(&self, mut goal: FinancialGoal) -> BudgetWiseResult<FinancialGoal> {
        goal.name = goal.name.trim().to_string();
        goal.validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let mut goals: Vec<FinancialGoal> = load_for_update(self.gateway)?;
        goals.push(goal.clone());
        self.gateway.save_collection(&goals);

        tracing::debug!(id = %goal.id, name = %goal.name, "Added goal");
        Ok(goal)
    }

    /// Apply an edit to an existing goal
    pub fn update(&self, id: GoalId, edit: GoalEdit) -> BudgetWiseResult<FinancialGoal> {
        self.modify(id, |goal| {
            if let Some(name) = edit.name {
                goal.name = name.trim().to_string();
            }
            if let Some(target) = edit.target_amount {
                goal.target_amount = target;
            }
            if let Some(current) = edit.current_amount {
                goal.current_amount = current;
            }
            if let Some(date) = edit.target_date {
                goal.target_date = Some(date);
            }
            if let Some(priority) = edit.priority {
                goal.priority = priority;
            }
            if let Some(description) = edit.description {
                let description = description.trim();
                goal.description = (!description.is_empty()).then(|| description.to_string());
            }
        })
    }

    /// Add a positive amount to the amount saved towards a goal
    pub fn contribute(&self, id: GoalId, amount: f64) -> BudgetWiseResult<FinancialGoal> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(BudgetWiseError::Validation(
                "Contribution must be positive".into(),
            ));
        }

        let goal = self.modify(id, |goal| goal.current_amount += amount)?;
        if goal.is_reached() {
            tracing::info!(name = %goal.name, "Goal reached");
        }
        Ok(goal)
    }

    /// Remove a goal; returns whether anything was removed
    pub fn remove(&self, id: GoalId) -> BudgetWiseResult<bool> {
        let mut goals: Vec<FinancialGoal> = load_for_update(self.gateway)?;
        let before = goals.len();
        goals.retain(|g| g.id != id);

        if goals.len() == before {
            return Ok(false);
        }

        self.gateway.save_collection(&goals);
        tracing::debug!(id = %id, "Removed goal");
        Ok(true)
    }

    fn modify(
        &self,
        id: GoalId,
        change: impl FnOnce(&mut FinancialGoal),
    ) -> BudgetWiseResult<FinancialGoal> {
        let mut goals: Vec<FinancialGoal> = load_for_update(self.gateway)?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| BudgetWiseError::goal_not_found(id.to_string()))?;

        change(goal);
        goal.validate()
            .map_err(|e| BudgetWiseError::Validation(e.to_string()))?;

        let updated = goal.clone();
        self.gateway.save_collection(&goals);

        tracing::debug!(id = %updated.id, "Updated goal");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_find() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);
        let goal = service.add(FinancialGoal::new("Vacation", 2400.0)).unwrap();

        assert_eq!(service.list().len(), 1);
        assert_eq!(service.find("vacation").unwrap().id, goal.id);
        assert_eq!(service.find(&goal.id.to_string()).unwrap().id, goal.id);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);

        assert!(service
            .add(FinancialGoal::new("Car", 0.0))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add(FinancialGoal::new("Car", 100.0).with_current_amount(-1.0))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_contribute() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);
        let goal = service.add(FinancialGoal::new("Laptop", 1000.0)).unwrap();

        let goal = service.contribute(goal.id, 400.0).unwrap();
        assert_eq!(goal.current_amount, 400.0);

        let goal = service.contribute(goal.id, 600.0).unwrap();
        assert!(goal.is_reached());
        assert_eq!(service.get(goal.id).unwrap().current_amount, 1000.0);
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);
        let goal = service.add(FinancialGoal::new("Laptop", 1000.0)).unwrap();

        assert!(service.contribute(goal.id, 0.0).unwrap_err().is_validation());
        assert!(service.contribute(goal.id, -10.0).unwrap_err().is_validation());
        assert!(service
            .contribute(GoalId::new(), 10.0)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_update() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);
        let goal = service.add(FinancialGoal::new("House", 50000.0)).unwrap();

        let updated = service
            .update(
                goal.id,
                GoalEdit {
                    priority: Some(GoalPriority::High),
                    description: Some("Deposit".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.priority, GoalPriority::High);
        assert_eq!(updated.description.as_deref(), Some("Deposit"));

        let err = service
            .update(
                goal.id,
                GoalEdit {
                    target_amount: Some(-1.0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get(goal.id).unwrap().target_amount, 50000.0);
    }

    #[test]
    fn test_remove() {
        let gateway = StorageGateway::in_memory();
        let service = GoalService::new(&gateway);
        let goal = service.add(FinancialGoal::new("Bike", 800.0)).unwrap();

        assert!(service.remove(goal.id).unwrap());
        assert!(service.list().is_empty());
        assert!(!service.remove(goal.id).unwrap());
    }
}
