//! View projection over a store snapshot
//!
//! The two views partition a snapshot: every task lands in exactly one of
//! them, in snapshot order. Rendering helpers turn the views into the text
//! shown by the command-line front end.

use crate::store::Task;
use std::fmt::Write;

/// Pending tasks, in snapshot order
pub fn pending_view(snapshot: &[Task]) -> Vec<&Task> {
    snapshot.iter().filter(|t| !t.is_completed).collect()
}

/// Completed tasks, in snapshot order
pub fn completed_view(snapshot: &[Task]) -> Vec<&Task> {
    snapshot.iter().filter(|t| t.is_completed).collect()
}

/// The two sections of the task screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Items,
    CompletedItems,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Items => "Items",
            Section::CompletedItems => "Completed Items",
        }
    }

    /// Tasks of `snapshot` that belong to this section
    pub fn project(self, snapshot: &[Task]) -> Vec<&Task> {
        match self {
            Section::Items => pending_view(snapshot),
            Section::CompletedItems => completed_view(snapshot),
        }
    }
}

/// Render one section as text
///
/// An empty section renders as a single `No <title> yet` line.
pub fn render_section(section: Section, snapshot: &[Task]) -> String {
    let tasks = section.project(snapshot);
    if tasks.is_empty() {
        return format!("No {} yet\n", section.title());
    }

    let mut result = format!("{}:\n", section.title());
    for task in tasks {
        let mark = if task.is_completed { 'x' } else { ' ' };
        // Writing into a String cannot fail
        let _ = writeln!(result, "  [{}] #{} {}", mark, task.id, task.text);
    }
    result
}

/// Render both sections, pending first
pub fn render_views(snapshot: &[Task]) -> String {
    let mut result = render_section(Section::Items, snapshot);
    result.push('\n');
    result.push_str(&render_section(Section::CompletedItems, snapshot));
    result
}
