//! Persisted UI state.
//!
//! Currently only the theme survives restarts, stored in state.json under
//! the config directory.

use std::path::PathBuf;

use tracing::warn;
use trustai_core::app_state::AppState;

use crate::paths::TrustAiPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};

/// Store for the persisted application state.
pub struct StateStore {
    file: AtomicJsonFile<AppState>,
}

impl StateStore {
    /// Creates a store backed by the default state file
    /// (~/.config/trustai/state.json).
    pub fn new() -> Result<Self, AtomicJsonError> {
        let path = TrustAiPaths::state_file().map_err(|e| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                e.to_string(),
            ))
        })?;
        Ok(Self::with_path(path))
    }

    /// Creates a store backed by a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Loads the persisted state, falling back to the default (light theme)
    /// when the file is missing or unreadable.
    pub fn load(&self) -> AppState {
        match self.file.load() {
            Ok(Some(state)) => state,
            Ok(None) => AppState::default(),
            Err(e) => {
                warn!(error = %e, "falling back to default state");
                AppState::default()
            }
        }
    }

    /// Persists the given state.
    pub fn save(&self, state: &AppState) -> Result<(), AtomicJsonError> {
        self.file.save(state)
    }
}
