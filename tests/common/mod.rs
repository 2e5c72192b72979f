//! Common test utilities for integration tests
#![allow(dead_code)]

use tempfile::TempDir;
use todo_session::{Storage, Task, TaskId, TaskStore};

/// Create storage pointing at a not-yet-existing file in a fresh temp dir
pub fn get_test_storage() -> (Storage, TempDir) {
    let dir = TempDir::new().unwrap();
    let storage = Storage::new(dir.path().join("session.toml"));
    (storage, dir)
}

/// Build a store by adding each text in order
pub fn store_with(texts: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for text in texts {
        store.add(text).unwrap();
    }
    store
}

/// Shorthand for an expected task
pub fn task(id: u64, text: &str, is_completed: bool) -> Task {
    Task {
        id: TaskId(id),
        text: text.to_string(),
        is_completed,
    }
}

/// Ids of a task list, in order
pub fn ids<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<u64> {
    tasks.into_iter().map(|t| t.id.get()).collect()
}
