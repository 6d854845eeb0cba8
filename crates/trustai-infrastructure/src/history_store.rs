//! Persisted analysis history.
//!
//! History lives in history.json under the config directory as an ordered
//! list of HistoryItem, most-recent-first. Corrupt files are discarded and
//! the store resets to empty rather than blocking startup.

use std::path::PathBuf;

use tracing::warn;
use trustai_core::history::HistoryItem;

use crate::paths::TrustAiPaths;
use crate::storage::{AtomicJsonError, AtomicJsonFile};

/// Store for the persisted analysis history.
pub struct HistoryStore {
    file: AtomicJsonFile<Vec<HistoryItem>>,
}

impl HistoryStore {
    /// Creates a store backed by the default history file
    /// (~/.config/trustai/history.json).
    pub fn new() -> Result<Self, AtomicJsonError> {
        let path = TrustAiPaths::history_file().map_err(|e| {
            AtomicJsonError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                e.to_string(),
            ))
        })?;
        Ok(Self::with_path(path))
    }

    /// Creates a store backed by a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Loads the history, most-recent-first.
    ///
    /// A missing file yields an empty list. A corrupt file is deleted, a
    /// warning is logged, and an empty list is returned so a bad write can
    /// never wedge the application.
    pub fn load(&self) -> Vec<HistoryItem> {
        match self.file.load() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(
                    path = %self.file.path().display(),
                    error = %e,
                    "discarding corrupt history file"
                );
                if let Err(e) = self.file.remove() {
                    warn!(error = %e, "failed to remove corrupt history file");
                }
                Vec::new()
            }
        }
    }

    /// Prepends a completed analysis to the history and persists it.
    pub fn append(&self, item: HistoryItem) -> Result<(), AtomicJsonError> {
        self.file.update(Vec::new(), |items| {
            items.insert(0, item);
            Ok(())
        })
    }

    /// Removes all persisted history.
    pub fn clear(&self) -> Result<(), AtomicJsonError> {
        self.file.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trustai_core::report::{
        Credibility, CredibilityStatus, ReportData, ReportSummary, SentimentAnalysis,
        SentimentTone, SourceAnalysis, SourceReputation, SourceType,
    };

    fn sample_report() -> ReportData {
        ReportData {
            credibility: Credibility {
                score: 20,
                confidence: 90,
                status: CredibilityStatus::NotCredible,
            },
            summary: ReportSummary {
                overview: "Sensational claim with no sourcing.".to_string(),
                explanation: "No supporting evidence was found.".to_string(),
            },
            sentiment_analysis: SentimentAnalysis {
                tone: SentimentTone::Sensationalist,
                bias: "Strong negative framing".to_string(),
            },
            fact_checks: Vec::new(),
            rewritten_text: None,
            source_analysis: SourceAnalysis {
                kind: SourceType::Text,
                reputation: SourceReputation::Unknown,
                details: Vec::new(),
            },
            referenced_sources: Vec::new(),
        }
    }

    fn item(summary: &str) -> HistoryItem {
        HistoryItem::new(summary.to_string(), sample_report())
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = HistoryStore::with_path(temp_dir.path().join("history.json"));

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_keeps_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = HistoryStore::with_path(temp_dir.path().join("history.json"));

        store.append(item("URL: https://example.com/first")).unwrap();
        store.append(item("URL: https://example.com/second")).unwrap();

        let items = store.load();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].input_summary, "URL: https://example.com/second");
        assert_eq!(items[1].input_summary, "URL: https://example.com/first");
    }

    #[test]
    fn test_corrupt_file_resets_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let store = HistoryStore::with_path(path.clone());
        assert!(store.load().is_empty());
        // The corrupt file is gone, so the next run starts clean.
        assert!(!path.exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.json");
        let store = HistoryStore::with_path(path.clone());

        store.append(item("Text: \"hello\"...")).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.load().is_empty());
    }
}
