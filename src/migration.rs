//! Migration of saved session records to the current layout
//!
//! ## Current Versions
//!
//! - **Version 1**: entries written as `id|text|flag` with no escaping,
//!   ids allocated from the task count, no persisted counter
//! - **Version 2**: text escaped inside entries, `next_id` persisted
//!
//! Each step is its own function; `migrate_to_latest` chains them.

use crate::error::StateError;
use crate::state::SessionState;
use crate::store::escape_text;
use tracing::info;

/// Bring a saved record up to `SessionState::CURRENT_VERSION`
pub fn migrate_to_latest(mut state: SessionState) -> Result<SessionState, StateError> {
    if state.format_version > SessionState::CURRENT_VERSION {
        return Err(StateError::UnsupportedVersion {
            found: state.format_version,
            supported: SessionState::CURRENT_VERSION,
        });
    }

    if state.format_version <= 1 {
        state = migrate_v1_to_v2(state);
    }

    Ok(state)
}

/// Re-encode legacy entries and drop the stale counter
///
/// Legacy text was written raw, so the id is everything before the first
/// bar and the flag everything after the last one. Entries with fewer than
/// two bars are left alone and fail later at decode time.
pub fn migrate_v1_to_v2(mut state: SessionState) -> SessionState {
    state.tasks = state
        .tasks
        .iter()
        .map(|entry| migrate_entry_v1(entry))
        .collect();
    // Recomputed from the largest id when the store is rebuilt
    state.next_id = 0;
    state.format_version = 2;
    info!(entries = state.tasks.len(), "migrated session state from version 1");
    state
}

fn migrate_entry_v1(entry: &str) -> String {
    match (entry.find('|'), entry.rfind('|')) {
        (Some(first), Some(last)) if first < last => {
            let id = &entry[..first];
            let text = &entry[first + 1..last];
            let flag = &entry[last + 1..];
            format!("{}|{}|{}", id, escape_text(text), flag)
        }
        _ => entry.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(tasks: &[&str]) -> SessionState {
        SessionState {
            format_version: 1,
            next_id: 0,
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
            input: String::new(),
            saved_at: None,
        }
    }

    #[test]
    fn test_plain_legacy_entries_are_unchanged() {
        let migrated = migrate_to_latest(legacy(&["1|a|false", "2|b|true"])).unwrap();
        assert_eq!(migrated.format_version, 2);
        assert_eq!(migrated.tasks, vec!["1|a|false", "2|b|true"]);
    }

    #[test]
    fn test_legacy_bar_in_text_is_escaped() {
        let migrated = migrate_to_latest(legacy(&["1|a|b|false"])).unwrap();
        assert_eq!(migrated.tasks, vec![r"1|a\|b|false"]);
    }

    #[test]
    fn test_legacy_backslash_is_escaped() {
        let migrated = migrate_to_latest(legacy(&[r"1|c:\tmp|true"])).unwrap();
        assert_eq!(migrated.tasks, vec![r"1|c:\\tmp|true"]);
    }

    #[test]
    fn test_short_legacy_entry_is_left_alone() {
        let migrated = migrate_to_latest(legacy(&["garbage", "1|only"])).unwrap();
        assert_eq!(migrated.tasks, vec!["garbage", "1|only"]);
    }

    #[test]
    fn test_current_version_passes_through() {
        let mut state = legacy(&[r"1|a\|b|false"]);
        state.format_version = 2;
        state.next_id = 9;
        let migrated = migrate_to_latest(state.clone()).unwrap();
        assert_eq!(migrated, state);
    }

    #[test]
    fn test_future_version_is_rejected() {
        let mut state = SessionState::new();
        state.format_version = 3;
        assert_eq!(
            migrate_to_latest(state),
            Err(StateError::UnsupportedVersion {
                found: 3,
                supported: 2
            })
        );
    }
}
