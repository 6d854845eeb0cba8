//! Analysis history domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::ReportData;

/// One completed analysis, as stored in the history list.
///
/// The id is the creation timestamp in Unix milliseconds and doubles as the
/// sort key; the list itself is kept most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: i64,
    /// Short human-readable description of the analyzed input.
    pub input_summary: String,
    pub report: ReportData,
}

impl HistoryItem {
    /// Creates an item stamped with the current time.
    pub fn new(input_summary: impl Into<String>, report: ReportData) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            input_summary: input_summary.into(),
            report,
        }
    }

    /// The creation time, when the id is a representable timestamp.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.id)
    }
}
