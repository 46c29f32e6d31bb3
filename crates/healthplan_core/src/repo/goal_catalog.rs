//! Goal catalog with single selection.
//!
//! # Responsibility
//! - Hold built-in and user-added goals in display order.
//! - Track which goal is currently selected for plan building.
//!
//! # Invariants
//! - Goal ids are unique within the catalog.
//! - The selection always refers to a goal present in the catalog.

use crate::error::{require_non_blank, ValidationError};
use crate::id::{fresh_id, BoxedIdGenerator};
use crate::model::goal::{default_goals, Goal, GoalId, CUSTOM_GOAL_ID_PREFIX};
use log::debug;

pub struct GoalCatalog {
    goals: Vec<Goal>,
    selected: Option<GoalId>,
    ids: BoxedIdGenerator,
}

impl GoalCatalog {
    /// Creates an empty catalog.
    pub fn new(ids: BoxedIdGenerator) -> Self {
        Self::with_goals(Vec::new(), ids)
    }

    /// Creates a catalog preloaded with the built-in presets.
    pub fn with_defaults(ids: BoxedIdGenerator) -> Self {
        Self::with_goals(default_goals(), ids)
    }

    /// Creates a catalog from `goals`; later duplicates of an id are dropped.
    pub fn with_goals(goals: Vec<Goal>, ids: BoxedIdGenerator) -> Self {
        let mut unique: Vec<Goal> = Vec::with_capacity(goals.len());
        for goal in goals {
            if unique.iter().any(|existing| existing.id == goal.id) {
                debug!("event=goal_seed module=repo status=skipped reason=duplicate_id");
                continue;
            }
            unique.push(goal);
        }
        Self {
            goals: unique,
            selected: None,
            ids,
        }
    }

    /// Goals in display order.
    pub fn list(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Appends a user-defined goal.
    ///
    /// # Errors
    /// - `ValidationError` when `name` or `icon` is blank after trimming.
    pub fn add_goal(&mut self, name: &str, icon: &str) -> Result<Goal, ValidationError> {
        let name = require_non_blank("name", name)?;
        let icon = require_non_blank("icon", icon)?;

        let goals = &self.goals;
        let id = fresh_id(self.ids.as_mut(), |candidate| {
            let id = format!("{CUSTOM_GOAL_ID_PREFIX}{candidate}");
            goals.iter().any(|goal| goal.id == id)
        });
        let goal = Goal::new(format!("{CUSTOM_GOAL_ID_PREFIX}{id}"), name, icon);
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Removes a goal by id. Missing ids are a no-op.
    ///
    /// Removing the selected goal clears the selection.
    pub fn remove_goal(&mut self, id: &str) -> Option<Goal> {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        let index = self.goals.iter().position(|goal| goal.id == id)?;
        Some(self.goals.remove(index))
    }

    /// Makes `id` the active goal and returns it.
    ///
    /// An unknown id leaves nothing selected and returns `None`.
    pub fn select_goal(&mut self, id: &str) -> Option<&Goal> {
        self.selected = self.get(id).map(|goal| goal.id.clone());
        self.selected()
    }

    pub fn selected(&self) -> Option<&Goal> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::GoalCatalog;
    use crate::id::SequentialIdGenerator;
    use crate::model::goal::Goal;

    #[test]
    fn with_goals_drops_duplicate_ids() {
        let catalog = GoalCatalog::with_goals(
            vec![
                Goal::new("a", "first", "1"),
                Goal::new("a", "second", "2"),
                Goal::new("b", "third", "3"),
            ],
            Box::new(SequentialIdGenerator::new()),
        );
        let names = catalog
            .list()
            .iter()
            .map(|goal| goal.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn add_goal_skips_ids_already_in_catalog() {
        let mut catalog = GoalCatalog::with_goals(
            vec![Goal::new("preset-1", "seeded", "🌱")],
            Box::new(SequentialIdGenerator::new()),
        );
        let goal = catalog.add_goal("new", "✨").expect("valid goal");
        assert_eq!(goal.id, "preset-2");
    }
}
