//! Session state record for save and restore
//!
//! This is what crosses the persistence boundary: the encoded task entries,
//! the id counter, and the raw input-field text.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Records without a `format_version` key predate versioning
fn legacy_format_version() -> u32 {
    1
}

/// Saved form of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Record layout version (current: 2)
    #[serde(default = "legacy_format_version")]
    pub format_version: u32,

    /// Next task id to allocate; 0 when unknown
    #[serde(default)]
    pub next_id: u64,

    /// Encoded task entries in store order
    #[serde(default, alias = "todos")]
    pub tasks: Vec<String>,

    /// Input-field text, kept verbatim
    #[serde(default, alias = "input_text")]
    pub input: String,

    /// Local time of the save that produced this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<NaiveDateTime>,
}

impl SessionState {
    pub const CURRENT_VERSION: u32 = 2;

    /// Empty record in the current layout
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            format_version: Self::CURRENT_VERSION,
            next_id: 0,
            tasks: Vec::new(),
            input: String::new(),
            saved_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_current_version() {
        let state = SessionState::new();
        assert_eq!(state.format_version, SessionState::CURRENT_VERSION);
        assert!(state.tasks.is_empty());
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_missing_version_reads_as_legacy() {
        let toml_str = r#"
tasks = ["1|a|false"]
input = "draft"
"#;
        let state: SessionState = toml::from_str(toml_str).unwrap();
        assert_eq!(state.format_version, 1);
        assert_eq!(state.next_id, 0);
        assert_eq!(state.tasks, vec!["1|a|false".to_string()]);
        assert_eq!(state.input, "draft");
        assert!(state.saved_at.is_none());
    }

    #[test]
    fn test_legacy_key_aliases() {
        let toml_str = r#"
todos = ["1|a|true"]
input_text = "x"
"#;
        let state: SessionState = toml::from_str(toml_str).unwrap();
        assert_eq!(state.tasks, vec!["1|a|true".to_string()]);
        assert_eq!(state.input, "x");
    }

    #[test]
    fn test_toml_round_trip_keeps_fields() {
        let state = SessionState {
            format_version: 2,
            next_id: 4,
            tasks: vec![r"1|a\|b|false".to_string(), "3|c|true".to_string()],
            input: "  half typed ".to_string(),
            saved_at: None,
        };

        let serialized = toml::to_string_pretty(&state).unwrap();
        let deserialized: SessionState = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized, state);
    }
}
