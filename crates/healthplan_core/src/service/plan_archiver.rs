//! Daily plan archiving: builder items to a saved plan plus reminders.
//!
//! # Responsibility
//! - Validate archive preconditions before producing anything.
//! - Derive one reminder per plan item, in item order.
//!
//! # Invariants
//! - Archiving is all-or-nothing and mutates no container.
//! - The saved plan owns a copy of the items and of the goal name.
//! - Reminder ids are `{plan_id}-{item_id}`. The plan id is the per-archive
//!   token that a wall-clock timestamp used to be; ids stay unique as long as
//!   plan ids and item ids are.

use crate::error::PreconditionError;
use crate::id::BoxedIdGenerator;
use crate::model::goal::Goal;
use crate::model::plan::{PlanItem, SavedPlan, PLAN_DATE_FORMAT};
use crate::model::reminder::{Reminder, ReminderColor};
use chrono::NaiveDate;

/// Accent given to every plan-derived reminder.
pub const PLAN_REMINDER_COLOR: ReminderColor = ReminderColor::Blue;

/// Result of one archive call. The caller stores both halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedPlan {
    pub plan: SavedPlan,
    /// Same order as the archived items.
    pub reminders: Vec<Reminder>,
}

pub struct PlanArchiver {
    ids: BoxedIdGenerator,
}

impl PlanArchiver {
    pub fn new(ids: BoxedIdGenerator) -> Self {
        Self { ids }
    }

    /// Converts the current plan items into a dated saved plan and its reminders.
    ///
    /// `today` is taken as-is; no time zone conversion happens here.
    ///
    /// # Errors
    /// - `PreconditionError::NoGoalSelected` when `selected_goal` is `None`.
    /// - `PreconditionError::EmptyPlan` when `items` is empty.
    pub fn archive(
        &mut self,
        selected_goal: Option<&Goal>,
        items: &[PlanItem],
        today: NaiveDate,
    ) -> Result<ArchivedPlan, PreconditionError> {
        let goal = selected_goal.ok_or(PreconditionError::NoGoalSelected)?;
        if items.is_empty() {
            return Err(PreconditionError::EmptyPlan);
        }

        let plan = SavedPlan {
            id: self.ids.next_id(),
            goal: goal.name.clone(),
            date: today.format(PLAN_DATE_FORMAT).to_string(),
            items: items.to_vec(),
        };
        let reminders = plan
            .items
            .iter()
            .map(|item| derive_reminder(&plan, item))
            .collect();

        Ok(ArchivedPlan { plan, reminders })
    }
}

fn derive_reminder(plan: &SavedPlan, item: &PlanItem) -> Reminder {
    Reminder {
        id: format!("{}-{}", plan.id, item.id),
        plan_id: Some(plan.id.clone()),
        goal_name: Some(plan.goal.clone()),
        time: item.time.clone(),
        content: item.reminder_text(),
        color: PLAN_REMINDER_COLOR,
    }
}
