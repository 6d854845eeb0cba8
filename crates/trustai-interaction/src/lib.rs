pub mod analysis_agent;
pub mod api_error;
pub mod chat_agent;
pub mod gemini_client;
pub mod nav_agent;
pub mod prompts;
pub mod schema;
pub mod secrets;
pub mod validate;
pub mod voice_transport;

pub use crate::analysis_agent::GeminiAnalyzer;
pub use crate::api_error::ApiError;
pub use crate::chat_agent::GeminiReportChat;
pub use crate::gemini_client::GeminiClient;
pub use crate::nav_agent::GeminiNavigator;
pub use crate::secrets::{GeminiCredentials, resolve_credentials};
pub use crate::voice_transport::ProcessVoiceTransport;
