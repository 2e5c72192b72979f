use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a task within one store lifetime
///
/// Ids are allocated by the store in increasing order and are never
/// renumbered, so the same id always refers to the same task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Raw numeric value of the id
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        TaskId(value)
    }
}

impl FromStr for TaskId {
    type Err = String;

    /// Accepts both `3` and `#3`, the latter being how ids are rendered
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| format!("Invalid task id '{}'. Use a number such as 1 or #1", s))
    }
}

/// A single to-do entry
///
/// `text` is fixed at creation; only the completion flag changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier
    pub id: TaskId,
    /// Trimmed, non-empty description
    pub text: String,
    /// Whether the task sits in the completed section
    pub is_completed: bool,
}

impl Task {
    /// Create a pending task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_completed: false,
        }
    }

    /// Flip the completion flag
    pub(crate) fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_parses_plain_and_hash_forms() {
        assert_eq!("7".parse::<TaskId>().unwrap(), TaskId(7));
        assert_eq!("#7".parse::<TaskId>().unwrap(), TaskId(7));
        assert_eq!(" #12 ".parse::<TaskId>().unwrap(), TaskId(12));
    }

    #[test]
    fn test_task_id_rejects_garbage() {
        assert!("".parse::<TaskId>().is_err());
        assert!("#".parse::<TaskId>().is_err());
        assert!("-1".parse::<TaskId>().is_err());
        assert!("one".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(TaskId(1), "buy milk");
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.text, "buy milk");
        assert!(!task.is_completed);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut task = Task::new(TaskId(1), "a");
        task.toggle();
        assert!(task.is_completed);
        task.toggle();
        assert!(!task.is_completed);
    }
}
