//! Entry codec for persisted tasks
//!
//! Each task is written as one string, `<id>|<text>|<is_completed>`.
//! Inside `text`, `\` is written as `\\` and `|` as `\|`, so only unescaped
//! bars separate fields. Entries whose text holds neither character are
//! identical to the unescaped legacy form, and unknown escapes are read
//! back literally, which keeps old records decodable.

use super::task::{Task, TaskId};
use crate::error::DeserializationError;

const DELIMITER: char = '|';
const ESCAPE: char = '\\';

/// Encode one task as a persisted entry
pub fn encode_entry(task: &Task) -> String {
    let mut out = String::with_capacity(task.text.len() + 16);
    out.push_str(&task.id.to_string());
    out.push(DELIMITER);
    push_escaped(&mut out, &task.text);
    out.push(DELIMITER);
    out.push_str(if task.is_completed { "true" } else { "false" });
    out
}

/// Escape `text` so it can sit in the middle field of an entry
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ch == DELIMITER || ch == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(ch);
    }
}

/// Decode one persisted entry
///
/// `index` is the entry's position in the persisted sequence and is only
/// used for error reporting.
pub fn decode_entry(entry: &str, index: usize) -> Result<Task, DeserializationError> {
    let fields = split_fields(entry);
    if fields.len() != 3 {
        return Err(DeserializationError::FieldCount {
            index,
            found: fields.len(),
        });
    }

    let id = fields[0]
        .trim()
        .parse::<u64>()
        .map_err(|_| DeserializationError::InvalidId {
            index,
            value: fields[0].clone(),
        })?;
    let is_completed = parse_flag(&fields[2]).ok_or_else(|| DeserializationError::InvalidFlag {
        index,
        value: fields[2].clone(),
    })?;

    Ok(Task {
        id: TaskId(id),
        text: fields[1].clone(),
        is_completed,
    })
}

/// Split on unescaped delimiters, resolving escapes as we go
fn split_fields(entry: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(3);
    let mut current = String::new();
    let mut chars = entry.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => match chars.next() {
                Some(next) if next == DELIMITER || next == ESCAPE => current.push(next),
                // Unknown escape or trailing backslash: keep it as written
                Some(next) => {
                    current.push(ESCAPE);
                    current.push(next);
                }
                None => current.push(ESCAPE),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
