use crate::state::SessionState;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Host-side state file used across session restoration
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the saved session record, or an empty one if none exists
    pub fn load(&self) -> Result<SessionState> {
        if !self.file_path.exists() {
            return Ok(SessionState::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("failed to read {}", self.file_path.display()))?;
        let state: SessionState = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", self.file_path.display()))?;
        info!(path = %self.file_path.display(), tasks = state.tasks.len(), "session state loaded");
        Ok(state)
    }

    /// Read the saved session record, falling back to an empty one
    ///
    /// An unreadable or unparseable file is treated like corrupt entries:
    /// the saved session is dropped with a warning and the next `save`
    /// overwrites it.
    pub fn load_or_empty(&self) -> SessionState {
        match self.load() {
            Ok(state) => state,
            Err(e) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %format_args!("{:#}", e),
                    "discarding unreadable session state"
                );
                SessionState::new()
            }
        }
    }

    /// Write the session record, stamping it with the current local time
    pub fn save(&self, state: &SessionState) -> Result<()> {
        let mut state = state.clone();
        state.saved_at = Some(Local::now().naive_local());
        let content = toml::to_string_pretty(&state)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        info!(path = %self.file_path.display(), tasks = state.tasks.len(), "session state saved");
        Ok(())
    }

    /// Drop the saved record so the next load starts fresh
    pub fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .with_context(|| format!("failed to remove {}", self.file_path.display()))?;
        }
        Ok(())
    }
}
