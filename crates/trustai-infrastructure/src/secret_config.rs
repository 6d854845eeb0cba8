//! Typed model for the secret configuration file (secret.json).

use serde::{Deserialize, Serialize};

/// Root structure of secret.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials and optional model override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// Returns a template with empty credentials, suitable for writing on
    /// first run so users know which fields to fill in.
    pub fn template() -> Self {
        Self {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some("gemini-2.5-flash".to_string()),
            }),
        }
    }
}
