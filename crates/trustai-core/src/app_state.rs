//! Application state domain models.
//!
//! Contains application-level state that persists across runs.

use serde::{Deserialize, Serialize};

/// Color theme of the user interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application state that persists across restarts.
///
/// Written through on every mutation so the on-disk copy always matches the
/// in-memory one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppState {
    /// The selected color theme, restored on startup.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new AppState with the default (light) theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new AppState with a specific theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
