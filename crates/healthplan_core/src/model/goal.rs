//! Health goal model and built-in presets.

use serde::{Deserialize, Serialize};

/// Stable identifier of a goal inside one catalog.
pub type GoalId = String;

/// A named health objective the user can pick before building a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    /// Short display glyph, usually one emoji.
    pub icon: String,
}

impl Goal {
    pub fn new(id: impl Into<GoalId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Prefix for ids of goals added at runtime.
pub const CUSTOM_GOAL_ID_PREFIX: &str = "preset-";

const DEFAULT_GOALS: &[(&str, &str, &str)] = &[
    ("weight_loss", "减肥", "⚖️"),
    ("muscle_gain", "增肌", "💪"),
    ("sleep_improve", "改善睡眠", "😴"),
    ("nutrition", "营养均衡", "🥗"),
    ("mental_health", "心理健康", "🧘"),
    ("endurance", "耐力训练", "🏃"),
    ("flexibility", "柔韧性", "🤸"),
    ("stress_relief", "减压", "🎵"),
    ("hydration", "补水", "💧"),
    ("meditation", "冥想", "🌟"),
];

/// Returns the built-in goal presets in display order.
pub fn default_goals() -> Vec<Goal> {
    DEFAULT_GOALS
        .iter()
        .map(|(id, name, icon)| Goal::new(*id, *name, *icon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::default_goals;
    use std::collections::HashSet;

    #[test]
    fn default_goal_ids_are_unique() {
        let goals = default_goals();
        let ids = goals.iter().map(|goal| goal.id.as_str()).collect::<HashSet<_>>();
        assert_eq!(ids.len(), goals.len());
        assert_eq!(goals.len(), 10);
    }

    #[test]
    fn default_goals_start_with_weight_loss() {
        let goals = default_goals();
        assert_eq!(goals[0].id, "weight_loss");
        assert_eq!(goals[0].name, "减肥");
    }
}
