//! Saved plan collection, most recent first.
//!
//! # Invariants
//! - Removing a plan never touches reminders derived from it.

use crate::model::plan::SavedPlan;

#[derive(Debug, Clone, Default)]
pub struct PlanHistory {
    plans: Vec<SavedPlan>,
}

impl PlanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a freshly archived plan in front.
    pub fn insert(&mut self, plan: SavedPlan) {
        self.plans.insert(0, plan);
    }

    /// Removes a plan by id. Missing ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<SavedPlan> {
        let index = self.plans.iter().position(|plan| plan.id == id)?;
        Some(self.plans.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&SavedPlan> {
        self.plans.iter().find(|plan| plan.id == id)
    }

    pub fn list(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PlanHistory;
    use crate::model::plan::SavedPlan;

    fn plan(id: &str) -> SavedPlan {
        SavedPlan {
            id: id.to_string(),
            goal: "补水".to_string(),
            date: "2024-03-01".to_string(),
            items: Vec::new(),
        }
    }

    #[test]
    fn insert_prepends() {
        let mut history = PlanHistory::new();
        history.insert(plan("older"));
        history.insert(plan("newer"));
        let ids = history.list().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["newer", "older"]);
    }

    #[test]
    fn remove_returns_removed_plan_and_ignores_unknown() {
        let mut history = PlanHistory::new();
        history.insert(plan("p1"));
        assert!(history.remove("nope").is_none());
        assert_eq!(history.remove("p1").map(|p| p.id), Some("p1".to_string()));
        assert!(history.is_empty());
    }
}
