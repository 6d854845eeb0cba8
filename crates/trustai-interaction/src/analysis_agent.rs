//! Credibility analysis backed by the Gemini API.

use async_trait::async_trait;
use tracing::debug;
use trustai_core::input::AnalysisInput;
use trustai_core::report::ReportData;
use trustai_core::service::ContentAnalyzer;
use trustai_core::{Result, TrustAiError};

use crate::gemini_client::{Content, GeminiClient, GenerateContentRequest, GenerationConfig, Part};
use crate::prompts::{ANALYSIS_SYSTEM_INSTRUCTION, IMAGE_ANALYSIS_PROMPT, analysis_prompt};
use crate::schema::REPORT_SCHEMA;
use crate::validate::parse_report_response;

const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Analyzer that sends submissions to Gemini and validates the structured
/// response into a report.
pub struct GeminiAnalyzer {
    client: GeminiClient,
    text_model: String,
    image_model: String,
}

impl GeminiAnalyzer {
    /// Creates an analyzer with the default model pair.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Overrides the model used for text, URL, and file submissions.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Overrides the model used for image submissions.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    fn model_for(&self, input: &AnalysisInput) -> &str {
        if input.is_image() {
            &self.image_model
        } else {
            &self.text_model
        }
    }

    fn build_request(input: &AnalysisInput) -> GenerateContentRequest {
        let parts = match input {
            AnalysisInput::Image { content, mime_type } => vec![
                Part::inline_data(mime_type.clone(), content.clone()),
                Part::text(IMAGE_ANALYSIS_PROMPT),
            ],
            other => vec![Part::text(analysis_prompt(other).unwrap_or_default())],
        };

        GenerateContentRequest {
            contents: vec![Content::user(parts)],
            system_instruction: Some(Content::system(ANALYSIS_SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig::json(REPORT_SCHEMA.clone())),
        }
    }
}

/// Wraps any failure on the analysis path into the single user-facing error.
fn analysis_failure(inner: impl std::fmt::Display) -> TrustAiError {
    TrustAiError::analysis(format!("Failed to get analysis from AI: {inner}"))
}

#[async_trait]
impl ContentAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, input: &AnalysisInput) -> Result<ReportData> {
        let model = self.model_for(input);
        debug!(model, "submitting analysis request");

        let request = Self::build_request(input);
        let raw = self
            .client
            .generate(model, &request)
            .await
            .map_err(analysis_failure)?;

        parse_report_response(&raw).map_err(analysis_failure)
    }
}
