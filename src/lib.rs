//! Todo Session Library
//!
//! This library provides the state behind a single-list task application:
//! an ordered task store, the pending/completed views derived from it, and
//! the session layer that takes user intents and saves/restores state
//! across transient teardowns.
//!
//! # Architecture
//!
//! - **Domain Layer**: `store` - Task entity, task store, entry codec
//! - **View Layer**: `views` - Pending/completed projections and rendering
//! - **Session Layer**: `session` - Intent handlers and change notification
//! - **Persistence Layer**: `state`, `migration`, `storage` - Versioned
//!   session record and its TOML state file
//!
//! # Example
//!
//! ```
//! use todo_session::{Session, TaskId};
//!
//! let mut session = Session::new();
//! session.on_add_intent_with("a").unwrap();
//! session.on_add_intent_with("b").unwrap();
//! session.on_toggle_intent(TaskId(1));
//!
//! assert_eq!(session.pending().len(), 1);
//! assert_eq!(session.completed()[0].text, "a");
//!
//! let restored = todo_session::Session::restore(session.save_state());
//! assert_eq!(restored.store().snapshot(), session.store().snapshot());
//! ```

pub mod error;
pub mod logging;
pub mod migration;
pub mod session;
pub mod state;
pub mod storage;
pub mod store;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use error::{DeserializationError, StateError, ValidationError};
pub use session::{ChangeListener, Session};
pub use state::SessionState;
pub use storage::Storage;
pub use store::{Task, TaskId, TaskStore};
pub use views::{Section, completed_view, pending_view, render_views};
