//! Path resolution for everything trustai persists.
//!
//! Every store resolves its file through here so the whole application
//! agrees on one per-user config directory.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "cannot resolve the user config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Well-known file locations under the trustai config directory.
///
/// ```text
/// ~/.config/trustai/           # XDG config dir on Linux
/// ├── config.toml              # Optional application configuration
/// ├── secret.json              # API keys (0600 on Unix)
/// ├── history.json             # Persisted analysis history
/// └── state.json               # Persisted UI state (theme)
/// ```
pub struct TrustAiPaths;

impl TrustAiPaths {
    /// The trustai configuration directory, e.g. `~/.config/trustai/`.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("trustai"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Location of the optional config.toml.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Location of the credential file.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Location of the persisted analysis history.
    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("history.json"))
    }

    /// Location of the persisted UI state (theme).
    pub fn state_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("state.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_files_live_under_the_config_dir() {
        let config_dir = TrustAiPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("trustai"));

        for file in [
            TrustAiPaths::config_file().unwrap(),
            TrustAiPaths::secret_file().unwrap(),
            TrustAiPaths::history_file().unwrap(),
            TrustAiPaths::state_file().unwrap(),
        ] {
            assert!(file.starts_with(&config_dir));
        }
    }

    #[test]
    fn test_file_names() {
        assert!(TrustAiPaths::config_file().unwrap().ends_with("config.toml"));
        assert!(TrustAiPaths::secret_file().unwrap().ends_with("secret.json"));
        assert!(TrustAiPaths::history_file().unwrap().ends_with("history.json"));
        assert!(TrustAiPaths::state_file().unwrap().ends_with("state.json"));
    }
}
