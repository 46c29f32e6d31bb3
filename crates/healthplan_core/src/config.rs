//! Session configuration.
//!
//! # Responsibility
//! - Describe how a `HealthService` session is seeded and which id source it
//!   uses.
//! - Apply environment overrides for embedders without a config file.

use crate::id::IdSource;
use serde::{Deserialize, Serialize};

/// Env var toggling both seed flags (`0|false|off` disables).
pub const ENV_SEED_DEFAULTS: &str = "HEALTHPLAN_SEED_DEFAULTS";
/// Env var selecting the id source (`uuid|clock|sequential`).
pub const ENV_ID_SOURCE: &str = "HEALTHPLAN_ID_SOURCE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Preload the built-in goal presets.
    pub seed_default_goals: bool,
    /// Preload the sample reminders.
    pub seed_default_reminders: bool,
    pub id_source: IdSource,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_default_goals: true,
            seed_default_reminders: true,
            id_source: IdSource::default(),
        }
    }
}

impl SessionConfig {
    /// Default config with process environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(seed) = lookup(ENV_SEED_DEFAULTS).and_then(|raw| parse_flag(&raw)) {
            self.seed_default_goals = seed;
            self.seed_default_reminders = seed;
        }
        if let Some(source) = lookup(ENV_ID_SOURCE).and_then(|raw| parse_id_source(&raw)) {
            self.id_source = source;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn parse_id_source(raw: &str) -> Option<IdSource> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "uuid" => Some(IdSource::Uuid),
        "clock" => Some(IdSource::Clock),
        "sequential" => Some(IdSource::Sequential),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionConfig, ENV_ID_SOURCE, ENV_SEED_DEFAULTS};
    use crate::id::IdSource;

    #[test]
    fn defaults_seed_everything_with_uuid_ids() {
        let config = SessionConfig::default();
        assert!(config.seed_default_goals);
        assert!(config.seed_default_reminders);
        assert_eq!(config.id_source, IdSource::Uuid);
    }

    #[test]
    fn overrides_apply_known_values() {
        let mut config = SessionConfig::default();
        config.apply_overrides(|key| match key {
            ENV_SEED_DEFAULTS => Some(" Off ".to_string()),
            ENV_ID_SOURCE => Some("clock".to_string()),
            _ => None,
        });
        assert!(!config.seed_default_goals);
        assert!(!config.seed_default_reminders);
        assert_eq!(config.id_source, IdSource::Clock);
    }

    #[test]
    fn overrides_ignore_garbage() {
        let mut config = SessionConfig::default();
        config.apply_overrides(|_| Some("maybe".to_string()));
        assert_eq!(config, SessionConfig::default());
    }
}
