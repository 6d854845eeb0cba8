//! Service traits implemented by the interaction layer.
//!
//! The controller and its tests depend on these seams rather than on any
//! concrete model client, so the external analysis service can be mocked.

use async_trait::async_trait;

use crate::chat::ChatMessage;
use crate::error::Result;
use crate::input::AnalysisInput;
use crate::nav::NavAction;
use crate::report::ReportData;

/// Runs a credibility analysis over one piece of user content.
///
/// Exactly one request is issued per call; there is no retry. The error half
/// carries the user-facing analysis failure message.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    async fn analyze(&self, input: &AnalysisInput) -> Result<ReportData>;
}

/// Maps a free-text command to one in-app action.
///
/// Never fails: any transport or parsing problem degrades to
/// [`NavAction::Unknown`].
#[async_trait]
pub trait NavCommandInterpreter: Send + Sync {
    async fn interpret(&self, command: &str) -> NavAction;
}

/// Answers a follow-up question about a previously generated report.
///
/// `history` is the full transcript so far, most recent last; the reply is
/// generated for the final user turn with the report as context.
#[async_trait]
pub trait ReportChat: Send + Sync {
    async fn reply(&self, history: &[ChatMessage], report: &ReportData) -> Result<String>;
}
