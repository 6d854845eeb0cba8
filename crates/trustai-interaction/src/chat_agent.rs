//! Follow-up chat about a displayed report.
//!
//! Failures never escape as errors: the reply degrades to a fixed apology
//! so the transcript stays consistent for the caller.

use async_trait::async_trait;
use tracing::warn;
use trustai_core::Result;
use trustai_core::chat::{ChatMessage, ChatRole};
use trustai_core::report::ReportData;
use trustai_core::service::ReportChat;

use crate::gemini_client::{Content, GeminiClient, GenerateContentRequest, Part};
use crate::prompts::chat_system_instruction;

const CHAT_MODEL: &str = "gemini-2.5-flash";

/// Returned in place of a reply when the chat call fails.
const CHAT_FAILURE_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Gemini-backed follow-up assistant for the current report.
pub struct GeminiReportChat {
    client: GeminiClient,
    model: String,
}

impl GeminiReportChat {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: CHAT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(history: &[ChatMessage], report: &ReportData) -> GenerateContentRequest {
        let contents = history
            .iter()
            .map(|msg| {
                let part = Part::text(msg.text.clone());
                match msg.role {
                    ChatRole::User => Content::user(vec![part]),
                    ChatRole::Assistant => Content::model(vec![part]),
                }
            })
            .collect();

        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(chat_system_instruction(report))),
            generation_config: None,
        }
    }
}

#[async_trait]
impl ReportChat for GeminiReportChat {
    async fn reply(&self, history: &[ChatMessage], report: &ReportData) -> Result<String> {
        let request = Self::build_request(history, report);
        match self.client.generate(&self.model, &request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(error = %e, "follow-up chat request failed");
                Ok(CHAT_FAILURE_REPLY.to_string())
            }
        }
    }
}
