//! Error types for the task store and session state
//!
//! Domain failures are typed so the presentation layer can react to each
//! one; file and format errors at the application boundary go through
//! `anyhow` instead.

use thiserror::Error;

/// Rejection of an add; the store is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text was empty or whitespace only
    #[error("Task cannot be empty")]
    EmptyText,

    /// The id counter has no values left
    #[error("No task ids left")]
    IdsExhausted,
}

/// A persisted task entry that could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeserializationError {
    #[error("entry {index}: expected 3 fields separated by '|', found {found}")]
    FieldCount { index: usize, found: usize },

    #[error("entry {index}: invalid task id '{value}'")]
    InvalidId { index: usize, value: String },

    #[error("entry {index}: invalid completion flag '{value}' (expected true or false)")]
    InvalidFlag { index: usize, value: String },
}

impl DeserializationError {
    /// Position of the offending entry in the persisted sequence
    pub fn index(&self) -> usize {
        match self {
            DeserializationError::FieldCount { index, .. }
            | DeserializationError::InvalidId { index, .. }
            | DeserializationError::InvalidFlag { index, .. } => *index,
        }
    }
}

/// Failure to turn a saved session record back into a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("unsupported session format version {found} (newest supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error(transparent)]
    Entry(#[from] DeserializationError),
}
