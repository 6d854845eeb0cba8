//! Natural-language navigation command interpreter.
//!
//! Interpretation never fails: any transport or parsing problem collapses
//! to `NavAction::Unknown` so the caller always has something to act on.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use trustai_core::nav::{InputMode, NavAction, View};
use trustai_core::service::NavCommandInterpreter;

use crate::gemini_client::{Content, GeminiClient, GenerateContentRequest, GenerationConfig, Part};
use crate::prompts::{NAV_SYSTEM_INSTRUCTION, nav_command_prompt};
use crate::schema::NAV_SCHEMA;

const NAV_MODEL: &str = "gemini-2.5-flash";

/// Substituted when the model answers without any response text.
const ANSWER_FALLBACK: &str = "I'm not sure how to answer that.";

/// Interpreter that maps free-form commands onto app actions via Gemini.
pub struct GeminiNavigator {
    client: GeminiClient,
    model: String,
}

impl GeminiNavigator {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: NAV_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(command: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::user(vec![Part::text(nav_command_prompt(command))])],
            system_instruction: Some(Content::system(NAV_SYSTEM_INSTRUCTION)),
            generation_config: Some(GenerationConfig::json(NAV_SCHEMA.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NavActionWire {
    action: String,
    #[serde(default)]
    value: NavValueWire,
}

#[derive(Debug, Default, Deserialize)]
struct NavValueWire {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

/// Maps a raw interpreter response onto a navigation action.
fn parse_nav_action(raw: &str) -> NavAction {
    let Ok(wire) = serde_json::from_str::<NavActionWire>(raw.trim()) else {
        return NavAction::Unknown;
    };

    match wire.action.as_str() {
        "navigate" => match wire.value.target.as_deref().map(str::parse::<View>) {
            Some(Ok(target)) => NavAction::Navigate { target },
            _ => NavAction::Unknown,
        },
        "toggle_theme" => NavAction::ToggleTheme,
        "set_input_type" => match wire.value.target.as_deref().map(str::parse::<InputMode>) {
            Some(Ok(target)) => NavAction::SetInputType { target },
            _ => NavAction::Unknown,
        },
        "answer" => NavAction::Answer {
            response: wire
                .value
                .response
                .unwrap_or_else(|| ANSWER_FALLBACK.to_string()),
        },
        _ => NavAction::Unknown,
    }
}

#[async_trait]
impl NavCommandInterpreter for GeminiNavigator {
    async fn interpret(&self, command: &str) -> NavAction {
        let request = Self::build_request(command);
        match self.client.generate(&self.model, &request).await {
            Ok(raw) => parse_nav_action(&raw),
            Err(e) => {
                warn!(error = %e, "nav command interpretation failed");
                NavAction::Unknown
            }
        }
    }
}
