//! Session view-model
//!
//! A `Session` owns one task store together with the input-field text and
//! the last notice shown to the user. Presentation code calls the
//! `on_*_intent` methods and re-renders from `pending()` / `completed()`,
//! either after every call or when a subscribed listener fires.

use crate::error::{StateError, ValidationError};
use crate::migration::migrate_to_latest;
use crate::state::SessionState;
use crate::store::{Task, TaskId, TaskStore};
use crate::views::{completed_view, pending_view};
use tracing::{debug, warn};

/// Receives the new snapshot after every change to the store
pub trait ChangeListener {
    fn on_change(&mut self, snapshot: &[Task]);
}

impl<F> ChangeListener for F
where
    F: FnMut(&[Task]),
{
    fn on_change(&mut self, snapshot: &[Task]) {
        self(snapshot)
    }
}

/// One user session over a single task list
#[derive(Default)]
pub struct Session {
    store: TaskStore,
    input: String,
    notice: Option<String>,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl Session {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from a saved record, strictly
    ///
    /// # Returns
    /// `StateError` if the record version is unsupported or any task
    /// entry is malformed
    pub fn try_restore(state: SessionState) -> Result<Self, StateError> {
        let state = migrate_to_latest(state)?;
        let store = TaskStore::restore(&state.tasks, state.next_id)?;
        debug!(tasks = store.len(), "session restored");
        Ok(Self {
            store,
            input: state.input,
            ..Self::default()
        })
    }

    /// Rebuild a session from a saved record
    ///
    /// On any decode failure the whole task list is dropped and the
    /// session starts empty; the saved input text is kept either way.
    pub fn restore(state: SessionState) -> Self {
        let input = state.input.clone();
        match Self::try_restore(state) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "discarding saved tasks, starting with an empty list");
                Self {
                    input,
                    ..Self::default()
                }
            }
        }
    }

    /// Produce the record to hand to the host on session save
    pub fn save_state(&self) -> SessionState {
        SessionState {
            format_version: SessionState::CURRENT_VERSION,
            next_id: self.store.next_id().get(),
            tasks: self.store.serialize(),
            input: self.input.clone(),
            saved_at: None,
        }
    }

    /// Register a listener notified after each effective change
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input-field text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Notice produced by the most recent intent, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn pending(&self) -> Vec<&Task> {
        pending_view(self.store.snapshot())
    }

    pub fn completed(&self) -> Vec<&Task> {
        completed_view(self.store.snapshot())
    }

    /// Submit the current input text as a new task
    ///
    /// On success the input is cleared. On rejection the input is kept
    /// and the notice is set to the validation message.
    pub fn on_add_intent(&mut self) -> Result<TaskId, ValidationError> {
        self.notice = None;
        match self.store.add(&self.input) {
            Ok(id) => {
                self.input.clear();
                self.notify();
                Ok(id)
            }
            Err(e) => {
                debug!("add rejected: {}", e);
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Set the input text and submit it
    pub fn on_add_intent_with(
        &mut self,
        raw: impl Into<String>,
    ) -> Result<TaskId, ValidationError> {
        self.set_input(raw);
        self.on_add_intent()
    }

    pub fn on_toggle_intent(&mut self, id: TaskId) {
        self.notice = None;
        if self.store.toggle(id) {
            self.notify();
        }
    }

    pub fn on_delete_intent(&mut self, id: TaskId) {
        self.notice = None;
        if self.store.delete(id) {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let snapshot = self.store.snapshot();
        for listener in self.listeners.iter_mut() {
            listener.on_change(snapshot);
        }
    }
}
