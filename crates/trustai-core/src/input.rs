//! User-submitted content for analysis.

use serde::{Deserialize, Serialize};

/// Maximum accepted image payload size, before base64 encoding.
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// The MIME type accepted for file submissions.
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// One piece of user-supplied content, tagged by modality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisInput {
    Text {
        content: String,
    },
    Url {
        content: String,
    },
    /// Decoded plain-text file contents.
    File {
        content: String,
    },
    /// Base64-encoded image bytes plus the original MIME type.
    Image {
        content: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
}

impl AnalysisInput {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn url(content: impl Into<String>) -> Self {
        Self::Url {
            content: content.into(),
        }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Self::File {
            content: content.into(),
        }
    }

    pub fn image(content: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self::Image {
            content: content.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Short human-readable description used as the history entry label.
    ///
    /// `source_name` is the uploaded file's name for image/file inputs; the
    /// other modalities ignore it.
    pub fn summary(&self, source_name: Option<&str>) -> String {
        match self {
            Self::Text { content } => {
                let head: String = content.chars().take(50).collect();
                format!("Text: \"{head}...\"")
            }
            Self::Url { content } => format!("URL: {content}"),
            Self::Image { .. } => format!("Image: {}", source_name.unwrap_or("uploaded image")),
            Self::File { .. } => format!("File: {}", source_name.unwrap_or("uploaded file")),
        }
    }
}
