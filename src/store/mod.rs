//! Task store domain model
//!
//! - `task`: the task entity and its id type
//! - `task_store`: the ordered collection and its add/toggle/delete operations
//! - `codec`: the string entry encoding used for session restoration

mod codec;
mod task;
mod task_store;

pub use codec::{decode_entry, encode_entry, escape_text};
pub use task::{Task, TaskId};
pub use task_store::TaskStore;
