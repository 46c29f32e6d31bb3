//! Reminder model.
//!
//! # Responsibility
//! - Represent both manually created and plan-derived reminders.
//!
//! # Invariants
//! - Manual reminders carry neither `plan_id` nor `goal_name`.
//! - Plan-derived reminders carry both; `plan_id` may outlive its plan.

use crate::model::plan::PlanId;
use serde::{Deserialize, Serialize};

pub type ReminderId = String;

/// Display accent of a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderColor {
    Green,
    Blue,
    Orange,
}

impl ReminderColor {
    /// Stable lowercase label used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
        }
    }
}

/// A timed notice shown to the user. Reminders are records, not scheduled
/// deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ReminderId,
    /// Back-reference to the originating saved plan, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
    /// Goal name snapshot for plan-derived reminders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_name: Option<String>,
    pub time: String,
    pub content: String,
    pub color: ReminderColor,
}

impl Reminder {
    /// Creates a reminder with no plan back-reference.
    pub fn manual(
        id: impl Into<ReminderId>,
        time: impl Into<String>,
        content: impl Into<String>,
        color: ReminderColor,
    ) -> Self {
        Self {
            id: id.into(),
            plan_id: None,
            goal_name: None,
            time: time.into(),
            content: content.into(),
            color,
        }
    }

    pub fn is_manual(&self) -> bool {
        self.plan_id.is_none()
    }

    pub fn belongs_to(&self, plan_id: &str) -> bool {
        self.plan_id.as_deref() == Some(plan_id)
    }
}

/// Sample reminders shown before the user has saved any plan.
pub fn default_reminders() -> Vec<Reminder> {
    vec![
        Reminder::manual("1", "07:00", "早晨锻炼提醒", ReminderColor::Green),
        Reminder::manual("2", "12:00", "午餐健康饮食提醒", ReminderColor::Blue),
        Reminder::manual("3", "22:00", "准备睡眠提醒", ReminderColor::Orange),
    ]
}

#[cfg(test)]
mod tests {
    use super::{default_reminders, Reminder, ReminderColor};

    #[test]
    fn manual_reminder_has_no_plan_link() {
        let reminder = Reminder::manual("r1", "08:00", "stretch", ReminderColor::Blue);
        assert!(reminder.is_manual());
        assert!(!reminder.belongs_to("r1"));
    }

    #[test]
    fn default_reminders_cover_every_color() {
        let colors = default_reminders()
            .into_iter()
            .map(|reminder| reminder.color)
            .collect::<Vec<_>>();
        assert_eq!(
            colors,
            vec![ReminderColor::Green, ReminderColor::Blue, ReminderColor::Orange]
        );
    }
}
