//! Navigation targets and interpreted nav-command actions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrustAiError;

/// Top-level application views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Analyzer,
    Learn,
    Transparency,
    History,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyzer => "analyzer",
            Self::Learn => "learn",
            Self::Transparency => "transparency",
            Self::History => "history",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = TrustAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analyzer" => Ok(Self::Analyzer),
            "learn" => Ok(Self::Learn),
            "transparency" => Ok(Self::Transparency),
            "history" => Ok(Self::History),
            other => Err(TrustAiError::invalid_input(format!(
                "Unknown view '{other}'. Expected one of: analyzer, learn, transparency, history."
            ))),
        }
    }
}

/// Input modality selected in the analyzer view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Text,
    Url,
    Image,
    File,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Image => "image",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = TrustAiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "url" => Ok(Self::Url),
            "image" => Ok(Self::Image),
            "file" => Ok(Self::File),
            other => Err(TrustAiError::invalid_input(format!(
                "Unknown input mode '{other}'. Expected one of: text, url, image, file."
            ))),
        }
    }
}

/// One interpreted nav command.
///
/// The interpreter returns exactly one of these per call and falls back to
/// `Unknown` on any failure, so callers never see an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Navigate { target: View },
    ToggleTheme,
    SetInputType { target: InputMode },
    Answer { response: String },
    Unknown,
}
