//! Error types for the TrustAI application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire TrustAI application.
///
/// Variants are grouped by where the failure surfaces: input rejection and
/// analysis failures carry user-facing text verbatim, the rest carry
/// diagnostic detail for logs.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum TrustAiError {
    /// User-supplied content rejected before analysis was attempted.
    /// The message is the inline text shown next to the input control.
    #[error("{0}")]
    InvalidInput(String),

    /// Analysis failure: network error, non-JSON response, or a response
    /// that does not match the expected report shape.
    #[error("{0}")]
    Analysis(String),

    /// Fatal voice transport condition (permission denial, spawn failure)
    #[error("Voice transport error: {0}")]
    VoiceTransport(String),

    /// A referenced entity (e.g. a history entry) does not exist.
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// File system failure.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TrustAiError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis(message.into())
    }

    pub fn voice_transport(message: impl Into<String>) -> Self {
        Self::VoiceTransport(message.into())
    }

    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for errors whose message should be shown inline at the input
    /// control rather than as a failure banner.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_analysis(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }

    pub fn is_voice_transport(&self) -> bool {
        matches!(self, Self::VoiceTransport(_))
    }
}

impl From<std::io::Error> for TrustAiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TrustAiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TrustAiError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TrustAiError>`.
pub type Result<T> = std::result::Result<T, TrustAiError>;
