//! Optional application configuration (config.toml).
//!
//! Everything in here has a sensible default, so a missing file is the
//! common case and never an error.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::paths::TrustAiPaths;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Failures while reading config.toml.
#[derive(Debug)]
pub enum ConfigStorageError {
    /// The file exists but could not be read.
    Io(std::io::Error),
    /// The file exists but is not valid TOML.
    Toml(toml::de::Error),
    /// The user config directory could not be resolved.
    NoConfigDir,
}

impl std::fmt::Display for ConfigStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigStorageError::Io(e) => write!(f, "config file I/O failed: {e}"),
            ConfigStorageError::Toml(e) => write!(f, "config file is not valid TOML: {e}"),
            ConfigStorageError::NoConfigDir => {
                write!(f, "could not resolve the user config directory")
            }
        }
    }
}

impl std::error::Error for ConfigStorageError {}

impl From<std::io::Error> for ConfigStorageError {
    fn from(e: std::io::Error) -> Self {
        ConfigStorageError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigStorageError {
    fn from(e: toml::de::Error) -> Self {
        ConfigStorageError::Toml(e)
    }
}

/// Root structure of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub voice: VoiceSettings,
}

/// `[analysis]` section: model overrides and request timeout.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    /// Overrides the model used for text, URL, and file analysis.
    #[serde(default)]
    pub text_model: Option<String>,
    /// Overrides the model used for image analysis.
    #[serde(default)]
    pub image_model: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            text_model: None,
            image_model: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// `[voice]` section: the external transcriber invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoiceSettings {
    /// Command line spawned for a dictation session. Each stdout line is
    /// one transcript segment.
    #[serde(default)]
    pub command: Option<String>,
}

/// Loader for the optional config.toml.
pub struct ConfigStorage {
    path: PathBuf,
}

impl ConfigStorage {
    /// Creates a storage handle for the default path
    /// (~/.config/trustai/config.toml).
    pub fn new() -> Result<Self, ConfigStorageError> {
        let path = TrustAiPaths::config_file().map_err(|_| ConfigStorageError::NoConfigDir)?;
        Ok(Self { path })
    }

    /// Creates a storage handle for a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(AppConfig)`: Parsed file, or all defaults if the file is
    ///   missing or empty
    /// - `Err`: Failed to read or parse an existing file
    pub fn load(&self) -> Result<AppConfig, ConfigStorageError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the path to the config file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let storage = ConfigStorage::with_path(temp_dir.path().join("config.toml"));

        let config = storage.load().unwrap();
        assert!(config.analysis.text_model.is_none());
        assert!(config.analysis.image_model.is_none());
        assert_eq!(config.analysis.timeout_secs, 60);
        assert!(config.voice.command.is_none());
    }

    #[test]
    fn test_full_config_parses() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[analysis]
text_model = "gemini-2.5-pro"
timeout_secs = 120

[voice]
command = "transcribe --stream"
"#,
        )
        .unwrap();

        let config = ConfigStorage::with_path(path).load().unwrap();
        assert_eq!(config.analysis.text_model.as_deref(), Some("gemini-2.5-pro"));
        assert!(config.analysis.image_model.is_none());
        assert_eq!(config.analysis.timeout_secs, 120);
        assert_eq!(config.voice.command.as_deref(), Some("transcribe --stream"));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[voice]\ncommand = \"rec\"\n").unwrap();

        let config = ConfigStorage::with_path(path).load().unwrap();
        assert_eq!(config.analysis.timeout_secs, 60);
        assert_eq!(config.voice.command.as_deref(), Some("rec"));
    }

    #[test]
    fn test_invalid_toml_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analysis\nbroken").unwrap();

        let result = ConfigStorage::with_path(path).load();
        assert!(matches!(result, Err(ConfigStorageError::Toml(_))));
    }
}
