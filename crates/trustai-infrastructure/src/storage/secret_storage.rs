//! Access to the secret credential file (secret.json).
//!
//! The file lives under the per-user config directory and is only ever
//! written once, as a first-run template with empty credentials. After that
//! the application treats it as read-only user property.

use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::TrustAiPaths;
use crate::secret_config::SecretConfig;

/// Failures while locating, bootstrapping, or reading secret.json.
///
/// Display output names paths and positions, never file contents, so these
/// errors are safe to log and print.
#[derive(Debug)]
pub enum SecretStorageError {
    /// No secret file exists at the resolved path.
    Missing(PathBuf),
    /// The per-user config directory could not be resolved.
    NoConfigDir,
    /// Reading or creating the file failed.
    Io(std::io::Error),
    /// The file exists but does not parse as the expected JSON shape.
    Json(serde_json::Error),
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::Missing(path) => {
                write!(f, "no secret file at {}", path.display())
            }
            SecretStorageError::NoConfigDir => {
                write!(f, "could not resolve the user config directory")
            }
            SecretStorageError::Io(e) => write!(f, "secret file I/O failed: {e}"),
            SecretStorageError::Json(e) => write!(f, "secret file is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::Io(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::Json(e)
    }
}

/// Reader and first-run bootstrapper for secret.json.
///
/// Credentials are stored as plaintext JSON, so the template is written with
/// mode 0600 on Unix. Validation of the key itself happens elsewhere; this
/// type only deals in file shape.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Points at the default location, `~/.config/trustai/secret.json`.
    pub fn new() -> Result<Self, SecretStorageError> {
        let path = TrustAiPaths::secret_file().map_err(|_| SecretStorageError::NoConfigDir)?;
        Ok(Self { path })
    }

    /// Points at an explicit file, for tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parses the secret file into its typed form.
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::Missing(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes a template with empty credentials unless the file already
    /// exists. Creates missing parent directories and restricts the new
    /// file to mode 0600 on Unix.
    pub fn ensure_template(&self) -> Result<(), SecretStorageError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let template = serde_json::to_string_pretty(&SecretConfig::template())?;
        fs::write(&self.path, template)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// The file this storage reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> SecretStorage {
        SecretStorage::with_path(dir.path().join("nested").join("secret.json"))
    }

    #[test]
    fn test_load_without_file_reports_the_path() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        match storage.load() {
            Err(SecretStorageError::Missing(path)) => assert_eq!(&path, storage.path()),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn test_load_parses_credentials() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(
            storage.path(),
            r#"{"gemini": {"api_key": "k-123", "model_name": "gemini-2.5-flash"}}"#,
        )
        .unwrap();

        let gemini = storage.load().unwrap().gemini.unwrap();
        assert_eq!(gemini.api_key, "k-123");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_load_tolerates_empty_object() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{}").unwrap();

        assert!(storage.load().unwrap().gemini.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), "{ not json").unwrap();

        assert!(matches!(storage.load(), Err(SecretStorageError::Json(_))));
    }

    #[test]
    fn test_ensure_template_bootstraps_a_private_file() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        storage.ensure_template().unwrap();

        assert!(storage.path().exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        // The template parses and carries an empty key for the user to fill in
        let gemini = storage.load().unwrap().gemini.unwrap();
        assert!(gemini.api_key.is_empty());
    }

    #[test]
    fn test_ensure_template_leaves_existing_file_alone() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        fs::create_dir_all(storage.path().parent().unwrap()).unwrap();
        fs::write(storage.path(), r#"{"gemini": {"api_key": "real-key"}}"#).unwrap();

        storage.ensure_template().unwrap();

        let content = fs::read_to_string(storage.path()).unwrap();
        assert!(content.contains("real-key"));
    }
}
