use super::codec::{decode_entry, encode_entry};
use super::task::{Task, TaskId};
use crate::error::{DeserializationError, ValidationError};
use crate::validation::normalize_task_text;
use tracing::debug;

/// Ordered collection of tasks and the single source of truth for them
///
/// Tasks are kept in insertion order; that order is the only ordering
/// there is. Ids come from a monotonic counter, so deleting a task and
/// adding another never hands out an id that is still in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    /// All tasks in insertion order
    pub(crate) tasks: Vec<Task>,

    /// Next id to hand out (always greater than every id in `tasks`)
    pub(crate) next_id: u64,

    /// Bumped on every mutation that changed the sequence
    pub(crate) revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task built from raw input text
    ///
    /// # Arguments
    /// * `text` - Raw text; surrounding whitespace is trimmed
    ///
    /// # Returns
    /// The id of the appended task, or `ValidationError::EmptyText` when the
    /// trimmed text is empty, or `ValidationError::IdsExhausted` when the
    /// counter cannot advance (the store is left untouched either way)
    pub fn add(&mut self, text: &str) -> Result<TaskId, ValidationError> {
        let text = normalize_task_text(text)?;
        let id = TaskId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(ValidationError::IdsExhausted)?;
        self.tasks.push(Task::new(id, text));
        self.revision += 1;
        debug!(%id, count = self.tasks.len(), "task added");
        Ok(id)
    }

    /// Flip the completion flag of the task with `id`
    ///
    /// Missing ids are ignored. Records produced by the old count-based
    /// allocator may hold several tasks with one id; all of them flip.
    ///
    /// # Returns
    /// `true` if at least one task changed
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let mut changed = false;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            task.toggle();
            changed = true;
        }
        if changed {
            self.revision += 1;
            debug!(%id, "task toggled");
        }
        changed
    }

    /// Remove the task with `id`, keeping the order of the rest
    ///
    /// # Returns
    /// `true` if at least one task was removed
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let changed = self.tasks.len() != before;
        if changed {
            self.revision += 1;
            debug!(%id, count = self.tasks.len(), "task deleted");
        }
        changed
    }

    /// Current ordered sequence of tasks
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next successful `add` will return
    pub fn next_id(&self) -> TaskId {
        TaskId(self.next_id)
    }

    /// Mutation counter, for callers that poll instead of subscribing
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Encode every task as one entry, in sequence order
    pub fn serialize(&self) -> Vec<String> {
        self.tasks.iter().map(encode_entry).collect()
    }

    /// Rebuild a store from encoded entries
    ///
    /// The first malformed entry fails the whole call. The id counter
    /// resumes after the largest id found.
    pub fn deserialize<S: AsRef<str>>(entries: &[S]) -> Result<Self, DeserializationError> {
        Self::restore(entries, 0)
    }

    /// Rebuild a store from encoded entries and a persisted id counter
    ///
    /// The counter is raised past the largest decoded id if it lags behind,
    /// so a stale or missing counter cannot cause id reuse. An id with no
    /// successor (`u64::MAX`) is rejected as `InvalidId`.
    pub fn restore<S: AsRef<str>>(
        entries: &[S],
        next_id: u64,
    ) -> Result<Self, DeserializationError> {
        let tasks = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| decode_entry(entry.as_ref(), index))
            .collect::<Result<Vec<_>, _>>()?;

        let mut after_max = 1;
        for (index, task) in tasks.iter().enumerate() {
            let after = task
                .id
                .0
                .checked_add(1)
                .ok_or_else(|| DeserializationError::InvalidId {
                    index,
                    value: task.id.to_string(),
                })?;
            after_max = after_max.max(after);
        }
        Ok(Self {
            tasks,
            next_id: next_id.max(after_max),
            revision: 0,
        })
    }
}
