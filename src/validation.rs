//! Validation helpers for user-supplied task text

use crate::error::ValidationError;

/// Trim raw input and reject it when nothing is left
///
/// # Arguments
/// * `raw` - Text as typed into the input field
///
/// # Returns
/// The trimmed text, or `ValidationError::EmptyText`
pub fn normalize_task_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(trimmed.to_string())
}
