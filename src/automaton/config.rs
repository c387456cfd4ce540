//! Engine configuration.
//!
//! Values come from defaults, optionally overridden by a deserialized config
//! section and then by environment variables (`SIMPLEFSM_*`).

use serde::{Deserialize, Serialize};

/// Behavior switches for an [`Automaton`](super::Automaton).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Reject transitions whose endpoints are not registered states.
    pub strict_states: bool,
    /// Keep a [`RunHistory`](crate::core::RunHistory) of the last run.
    pub record_history: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict_states: true,
            record_history: true,
        }
    }
}

impl EngineConfig {
    /// Defaults with environment variable overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Overrides fields from `SIMPLEFSM_STRICT_STATES` and
    /// `SIMPLEFSM_RECORD_HISTORY`. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(strict) = env_flag("SIMPLEFSM_STRICT_STATES") {
            self.strict_states = strict;
        }

        if let Some(record) = env_flag("SIMPLEFSM_RECORD_HISTORY") {
            self.record_history = record;
        }
    }

    /// Permissive registration: transitions may name unregistered states.
    pub fn permissive() -> Self {
        Self {
            strict_states: false,
            ..Self::default()
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    parse_flag(&value)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_strict_and_records() {
        let config = EngineConfig::default();
        assert!(config.strict_states);
        assert!(config.record_history);
    }

    #[test]
    fn permissive_only_relaxes_state_checks() {
        let config = EngineConfig::permissive();
        assert!(!config.strict_states);
        assert!(config.record_history);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"record_history": false}"#).unwrap();
        assert!(config.strict_states);
        assert!(!config.record_history);
    }

    #[test]
    fn json_roundtrip() {
        let config = EngineConfig::permissive();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    // Env vars are process-wide; keep every mutation in this one test.
    #[test]
    fn env_overrides_flip_fields_and_ignore_garbage() {
        std::env::set_var("SIMPLEFSM_STRICT_STATES", "false");
        std::env::set_var("SIMPLEFSM_RECORD_HISTORY", "off");
        let config = EngineConfig::from_env();
        assert!(!config.strict_states);
        assert!(!config.record_history);

        std::env::set_var("SIMPLEFSM_STRICT_STATES", "maybe");
        std::env::set_var("SIMPLEFSM_RECORD_HISTORY", "maybe");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());

        let mut config = EngineConfig::permissive();
        std::env::set_var("SIMPLEFSM_STRICT_STATES", "yes");
        std::env::remove_var("SIMPLEFSM_RECORD_HISTORY");
        config.apply_env_overrides();
        assert!(config.strict_states);
        assert!(config.record_history);

        std::env::remove_var("SIMPLEFSM_STRICT_STATES");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());
    }
}
