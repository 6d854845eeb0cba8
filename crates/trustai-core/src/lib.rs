pub mod app_state;
pub mod chat;
pub mod dictation;
pub mod error;
pub mod history;
pub mod input;
pub mod nav;
pub mod report;
pub mod service;

// Re-export common error type
pub use error::{Result, TrustAiError};
