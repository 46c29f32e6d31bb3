//! Health plan session facade.
//!
//! # Responsibility
//! - Own every container of one user session and route presentation actions
//!   to them.
//! - Commit archive results: plan in front of history, reminders in front of
//!   the store, builder cleared.
//!
//! # Invariants
//! - A failed save leaves goals, builder, history and reminders untouched.
//! - Deleting a saved plan never deletes its reminders.
//! - Logged events carry ids and counts only, never user text.

use crate::config::SessionConfig;
use crate::error::CoreResult;
use crate::model::goal::Goal;
use crate::model::plan::{PlanItem, SavedPlan};
use crate::model::reminder::Reminder;
use crate::repo::goal_catalog::GoalCatalog;
use crate::repo::plan_builder::PlanBuilder;
use crate::repo::plan_history::PlanHistory;
use crate::repo::reminder_store::ReminderStore;
use crate::service::plan_archiver::{ArchivedPlan, PlanArchiver};
use chrono::NaiveDate;
use log::{info, warn};

/// One user's goals, draft plan, saved plans and reminders.
pub struct HealthService {
    catalog: GoalCatalog,
    builder: PlanBuilder,
    archiver: PlanArchiver,
    history: PlanHistory,
    reminders: ReminderStore,
}

impl HealthService {
    /// Assembles a session from explicit containers.
    pub fn new(
        catalog: GoalCatalog,
        builder: PlanBuilder,
        archiver: PlanArchiver,
        history: PlanHistory,
        reminders: ReminderStore,
    ) -> Self {
        Self {
            catalog,
            builder,
            archiver,
            history,
            reminders,
        }
    }

    /// Builds a session with one id generator per container.
    pub fn from_config(config: &SessionConfig) -> Self {
        let source = config.id_source;
        let catalog = if config.seed_default_goals {
            GoalCatalog::with_defaults(source.generator())
        } else {
            GoalCatalog::new(source.generator())
        };
        let reminders = if config.seed_default_reminders {
            ReminderStore::with_defaults(source.generator())
        } else {
            ReminderStore::new(source.generator())
        };
        info!(
            "event=session_init module=service status=ok id_source={:?} goals={} reminders={}",
            source,
            catalog.list().len(),
            reminders.len()
        );
        Self::new(
            catalog,
            PlanBuilder::new(source.generator()),
            PlanArchiver::new(source.generator()),
            PlanHistory::new(),
            reminders,
        )
    }

    pub fn goals(&self) -> &[Goal] {
        self.catalog.list()
    }

    pub fn add_goal(&mut self, name: &str, icon: &str) -> CoreResult<Goal> {
        match self.catalog.add_goal(name, icon) {
            Ok(goal) => {
                info!("event=goal_add module=service status=ok goal_id={}", goal.id);
                Ok(goal)
            }
            Err(err) => {
                warn!(
                    "event=goal_add module=service status=error field={}",
                    err.field
                );
                Err(err.into())
            }
        }
    }

    pub fn remove_goal(&mut self, id: &str) -> Option<Goal> {
        let removed = self.catalog.remove_goal(id);
        info!(
            "event=goal_remove module=service status=ok goal_id={} found={}",
            id,
            removed.is_some()
        );
        removed
    }

    pub fn select_goal(&mut self, id: &str) -> Option<&Goal> {
        self.catalog.select_goal(id)
    }

    pub fn selected_goal(&self) -> Option<&Goal> {
        self.catalog.selected()
    }

    pub fn plan_items(&self) -> &[PlanItem] {
        self.builder.items()
    }

    pub fn add_plan_item(
        &mut self,
        title: &str,
        content: &str,
        time: &str,
    ) -> CoreResult<PlanItem> {
        let item = self.builder.add_item(title, content, time).map_err(|err| {
            warn!(
                "event=plan_item_add module=service status=error field={}",
                err.field
            );
            err
        })?;
        Ok(item)
    }

    pub fn remove_plan_item(&mut self, id: &str) -> Option<PlanItem> {
        self.builder.remove_item(id)
    }

    /// Archives the draft plan for the selected goal and commits the result.
    ///
    /// # Errors
    /// - `CoreError::Precondition` when no goal is selected or the draft is
    ///   empty; nothing changes in that case.
    pub fn save_daily_plan(&mut self, today: NaiveDate) -> CoreResult<SavedPlan> {
        let archived = self
            .archiver
            .archive(self.catalog.selected(), self.builder.items(), today)
            .map_err(|err| {
                warn!(
                    "event=plan_archive module=service status=error reason={:?}",
                    err
                );
                err
            })?;

        let ArchivedPlan { plan, reminders } = archived;
        let reminder_count = reminders.len();
        self.history.insert(plan.clone());
        self.reminders.prepend_batch(reminders);
        self.builder.clear();

        info!(
            "event=plan_archive module=service status=ok plan_id={} items={} reminders={}",
            plan.id,
            plan.items.len(),
            reminder_count
        );
        Ok(plan)
    }

    /// Saved plans, most recent first.
    pub fn saved_plans(&self) -> &[SavedPlan] {
        self.history.list()
    }

    /// Deletes a saved plan; its reminders stay in the store.
    pub fn delete_saved_plan(&mut self, id: &str) -> Option<SavedPlan> {
        let removed = self.history.remove(id);
        info!(
            "event=plan_delete module=service status=ok plan_id={} found={} orphaned_reminders={}",
            id,
            removed.is_some(),
            self.reminders.by_plan(id).len()
        );
        removed
    }

    pub fn reminders(&self) -> &[Reminder] {
        self.reminders.list()
    }

    pub fn add_reminder(&mut self, time: &str, content: &str) -> CoreResult<Reminder> {
        let reminder = self.reminders.add_manual(time, content).map_err(|err| {
            warn!(
                "event=reminder_add module=service status=error field={}",
                err.field
            );
            err
        })?;
        Ok(reminder)
    }

    pub fn delete_reminder(&mut self, id: &str) -> Option<Reminder> {
        self.reminders.remove(id)
    }

    pub fn reminders_for_plan(&self, plan_id: &str) -> Vec<&Reminder> {
        self.reminders.by_plan(plan_id)
    }

    pub fn manual_reminders(&self) -> Vec<&Reminder> {
        self.reminders.manual()
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
