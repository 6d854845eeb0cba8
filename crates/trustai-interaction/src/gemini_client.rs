//! Direct REST client for the Gemini generateContent API.
//!
//! Models are addressed per call, so one client serves the text and image
//! analysis paths as well as the nav and chat channels. The API key is kept
//! out of every error message; reqwest errors are stripped of their URL
//! before formatting because the key travels as a query parameter.

use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api_error::ApiError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Creates a new client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends a generateContent request to the given model and returns the
    /// first text part of the first candidate.
    pub async fn generate(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = model,
            api_key = self.api_key
        );

        log::debug!("Sending generateContent request to model {}", model);

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|err| {
                let is_retryable = err.is_connect() || err.is_timeout();
                ApiError::Process {
                    status_code: None,
                    // without_url keeps the keyed URL out of the message
                    message: format!("Gemini API request failed: {}", err.without_url()),
                    is_retryable,
                    retry_after: None,
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unreadable error body".to_string());
            log::warn!("Gemini API returned HTTP {}", status);
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ApiError::execution(format!(
                "Failed to parse Gemini response: {}",
                err.without_url()
            ))
        })?;

        extract_text_response(parsed)
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self {
            role: "model".to_string(),
            parts,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            parts: vec![Part::text(text)],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineDataPayload,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Part::InlineData {
            inline_data: InlineDataPayload {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDataPayload {
    pub mime_type: String,
    pub data: String,
}

/// Structured-output settings for a request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

impl GenerationConfig {
    /// JSON output constrained by the given response schema.
    pub fn json(schema: serde_json::Value) -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, ApiError> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            ApiError::execution("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> ApiError {
    // Prefer the structured Gemini error envelope; fall back to the raw body
    let message = match serde_json::from_str::<ErrorWrapper>(&body) {
        Ok(ErrorWrapper { error }) => {
            let detail = error.message.unwrap_or_else(|| body.clone());
            match error.status {
                Some(status_text) if !status_text.is_empty() => format!("{status_text}: {detail}"),
                _ => detail,
            }
        }
        Err(_) => body,
    };

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ApiError::Process {
        status_code: Some(status.as_u16()),
        message,
        is_retryable,
        retry_after,
    }
}

// Delta-seconds form only; HTTP-date values fall through to None.
fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let seconds = header?.to_str().ok()?.trim().parse::<u64>().ok()?;
    Some(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_part_serialization() {
        let part = Part::text("hello");
        assert_eq!(serde_json::to_value(&part).unwrap(), json!({"text": "hello"}));
    }

    #[test]
    fn test_inline_data_part_serialization() {
        let part = Part::inline_data("image/png", "QUJD");
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({"inlineData": {"mimeType": "image/png", "data": "QUJD"}})
        );
    }

    #[test]
    fn test_request_serialization_with_schema() {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text("analyze this")])],
            system_instruction: Some(Content::system("be thorough")),
            generation_config: Some(GenerationConfig::json(json!({"type": "OBJECT"}))),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "analyze this");
        assert_eq!(value["system_instruction"]["role"], "system");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_request_omits_optional_fields() {
        let request = GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text("hi")])],
            system_instruction: None,
            generation_config: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("system_instruction").is_none());
        assert!(value.get("generationConfig").is_none());
    }

    #[test]
    fn test_extract_text_takes_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(extract_text_response(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_skips_non_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{}, {"text": "found"}]}}
            ]
        }))
        .unwrap();

        assert_eq!(extract_text_response(response).unwrap(), "found");
    }

    #[test]
    fn test_extract_text_empty_response_errors() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();

        assert!(extract_text_response(response).is_err());
    }

    #[test]
    fn test_map_http_error_envelope_message() {
        let body = json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })
        .to_string();

        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            body,
            Some(Duration::from_secs(15)),
        );
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.retry_after(), Some(Duration::from_secs(15)));
        assert_eq!(err.to_string(), "RESOURCE_EXHAUSTED: Quota exceeded");
    }

    #[test]
    fn test_map_http_error_not_retryable() {
        let err = map_http_error(StatusCode::NOT_FOUND, "missing".to_string(), None);
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn test_parse_retry_after_seconds() {
        let header = HeaderValue::from_static("30");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_parse_retry_after_rejects_dates() {
        let header = HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT");
        assert_eq!(parse_retry_after(Some(&header)), None);
    }
}
