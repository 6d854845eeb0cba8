pub mod config_storage;
pub mod history_store;
pub mod input_loader;
pub mod paths;
pub mod report_export;
pub mod secret_config;
pub mod state_store;
pub mod storage;

pub use crate::config_storage::{AnalysisSettings, AppConfig, ConfigStorage, VoiceSettings};
pub use crate::history_store::HistoryStore;
pub use crate::input_loader::InputLoader;
pub use crate::paths::TrustAiPaths;
pub use crate::secret_config::{GeminiConfig, SecretConfig};
pub use crate::state_store::StateStore;
