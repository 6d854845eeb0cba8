//! Gemini credential resolution.
//!
//! The `GEMINI_API_KEY` environment variable takes precedence; otherwise the
//! key comes from secret.json. Error messages name paths and variables but
//! never the key material itself.

use trustai_core::{Result, TrustAiError};
use trustai_infrastructure::storage::SecretStorage;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Resolved credentials for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiCredentials {
    pub api_key: String,
    /// Optional default-model override from secret.json.
    pub model_name: Option<String>,
}

/// Resolves credentials from the environment and the default secret file.
pub fn resolve_credentials() -> Result<GeminiCredentials> {
    let storage = SecretStorage::new().map_err(|e| TrustAiError::config(e.to_string()))?;
    resolve_with(env_api_key(), &storage)
}

fn env_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Resolves credentials from an explicit environment value and storage.
pub fn resolve_with(env_key: Option<String>, storage: &SecretStorage) -> Result<GeminiCredentials> {
    if let Some(api_key) = env_key {
        // A model override from a readable secret file is still honored
        let model_name = storage
            .load()
            .ok()
            .and_then(|config| config.gemini)
            .and_then(|gemini| gemini.model_name);
        return Ok(GeminiCredentials {
            api_key,
            model_name,
        });
    }

    let config = storage
        .load()
        .map_err(|e| TrustAiError::config(e.to_string()))?;
    let gemini = config.gemini.ok_or_else(|| {
        TrustAiError::config(format!(
            "Gemini configuration not found in {}",
            storage.path().display()
        ))
    })?;

    if gemini.api_key.trim().is_empty() {
        return Err(TrustAiError::config(format!(
            "Gemini API key is empty. Set {API_KEY_ENV} or add it to {}",
            storage.path().display()
        )));
    }

    Ok(GeminiCredentials {
        api_key: gemini.api_key,
        model_name: gemini.model_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn storage_with(content: &str) -> (TempDir, SecretStorage) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        fs::write(&path, content).unwrap();
        (temp_dir, SecretStorage::with_path(path))
    }

    #[test]
    fn test_env_key_wins_over_file() {
        let (_dir, storage) = storage_with(
            r#"{"gemini": {"api_key": "file-key", "model_name": "gemini-2.5-pro"}}"#,
        );

        let creds = resolve_with(Some("env-key".to_string()), &storage).unwrap();
        assert_eq!(creds.api_key, "env-key");
        // Model override from the file is still applied
        assert_eq!(creds.model_name, Some("gemini-2.5-pro".to_string()));
    }

    #[test]
    fn test_env_key_works_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::with_path(temp_dir.path().join("secret.json"));

        let creds = resolve_with(Some("env-key".to_string()), &storage).unwrap();
        assert_eq!(creds.api_key, "env-key");
        assert!(creds.model_name.is_none());
    }

    #[test]
    fn test_file_credentials_resolve() {
        let (_dir, storage) = storage_with(r#"{"gemini": {"api_key": "file-key"}}"#);

        let creds = resolve_with(None, &storage).unwrap();
        assert_eq!(creds.api_key, "file-key");
        assert!(creds.model_name.is_none());
    }

    #[test]
    fn test_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        let storage = SecretStorage::with_path(path.clone());

        let err = resolve_with(None, &storage).unwrap_err();
        assert!(err.to_string().contains(path.display().to_string().as_str()));
    }

    #[test]
    fn test_missing_gemini_section_errors() {
        let (_dir, storage) = storage_with("{}");

        let err = resolve_with(None, &storage).unwrap_err();
        assert!(err.to_string().contains("Gemini configuration not found"));
    }

    #[test]
    fn test_blank_key_errors_without_leaking_it() {
        let (_dir, storage) = storage_with(r#"{"gemini": {"api_key": "   "}}"#);

        let err = resolve_with(None, &storage).unwrap_err();
        assert!(err.to_string().contains("Gemini API key is empty"));
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
