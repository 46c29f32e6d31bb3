//! Plan item and saved plan models.
//!
//! # Invariants
//! - `SavedPlan.items` is an owned snapshot taken at archive time.
//! - `SavedPlan.goal` is the goal name copied by value; later catalog edits do
//!   not reach archived plans.
//! - `SavedPlan.date` is always formatted as `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};

pub type PlanItemId = String;
pub type PlanId = String;

/// Date layout used for `SavedPlan.date`.
pub const PLAN_DATE_FORMAT: &str = "%Y-%m-%d";

/// One timed action inside an in-progress daily plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub id: PlanItemId,
    pub title: String,
    pub content: String,
    /// Wall-clock time of day as entered, `HH:MM`.
    pub time: String,
}

impl PlanItem {
    /// Text used for the reminder derived from this item.
    pub fn reminder_text(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }
}

/// Immutable, dated snapshot of a completed daily plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: PlanId,
    /// Goal name at archive time.
    pub goal: String,
    pub date: String,
    pub items: Vec<PlanItem>,
}

#[cfg(test)]
mod tests {
    use super::PlanItem;

    #[test]
    fn reminder_text_joins_title_and_content() {
        let item = PlanItem {
            id: "1".to_string(),
            title: "Run".to_string(),
            content: "5km jog".to_string(),
            time: "07:00".to_string(),
        };
        assert_eq!(item.reminder_text(), "Run: 5km jog");
    }
}
