//! Typed errors for Gemini API calls.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request failed at the transport or HTTP level.
    #[error("{message}")]
    Process {
        /// HTTP status code, if a response was received.
        status_code: Option<u16>,
        /// Message extracted from the Gemini error envelope, or the raw body.
        message: String,
        /// Whether the failure class is worth retrying.
        is_retryable: bool,
        /// Server-suggested delay from a `retry-after` header.
        retry_after: Option<Duration>,
    },
    /// The call completed but the response was unusable.
    #[error("{0}")]
    Execution(String),
}

impl ApiError {
    pub fn execution(message: impl Into<String>) -> Self {
        ApiError::Execution(message.into())
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Process { is_retryable, .. } => *is_retryable,
            ApiError::Execution(_) => false,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Process { status_code, .. } => *status_code,
            ApiError::Execution(_) => None,
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ApiError::Process { retry_after, .. } => *retry_after,
            ApiError::Execution(_) => None,
        }
    }
}
