//! Loads image and plain-text files into analysis inputs.
//!
//! Enforces the submission constraints before anything leaves the machine:
//! images are capped at 4 MiB and file submissions must be plain text.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use trustai_core::input::{AnalysisInput, MAX_IMAGE_BYTES, PLAIN_TEXT_MIME};
use trustai_core::{Result, TrustAiError};

/// An input loaded from disk, together with the file name used for history
/// summaries.
#[derive(Debug, Clone)]
pub struct LoadedInput {
    pub input: AnalysisInput,
    pub file_name: String,
}

/// Loader for filesystem-backed analysis inputs.
pub struct InputLoader;

impl InputLoader {
    /// Loads an image file as an inline-data analysis input.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the file exceeds 4 MiB or does not look like an
    ///   image by its extension
    /// - `Io` if the file cannot be read
    pub fn load_image(path: &Path) -> Result<LoadedInput> {
        let mime = mime_guess::from_path(path).first();
        let is_image = mime
            .as_ref()
            .map(|m| m.type_() == mime_guess::mime::IMAGE)
            .unwrap_or(false);
        if !is_image {
            return Err(TrustAiError::invalid_input(
                "Please provide a valid image file.",
            ));
        }

        let bytes = std::fs::read(path)?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(TrustAiError::invalid_input(
                "Image file size should not exceed 4MB.",
            ));
        }

        let mime = mime.map(|m| m.essence_str().to_string()).unwrap_or_default();
        Ok(LoadedInput {
            input: AnalysisInput::image(BASE64_STANDARD.encode(&bytes), mime),
            file_name: Self::file_name(path),
        })
    }

    /// Loads a plain-text file as a file analysis input.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the file's MIME type is not `text/plain`
    /// - `Io` if the file cannot be read
    pub fn load_text_file(path: &Path) -> Result<LoadedInput> {
        let mime = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string());
        if mime.as_deref() != Some(PLAIN_TEXT_MIME) {
            return Err(TrustAiError::invalid_input(
                "Please upload a valid .txt file.",
            ));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(LoadedInput {
            input: AnalysisInput::file(content),
            file_name: Self::file_name(path),
        })
    }

    fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
