//! Application controller for the interactive surface.
//!
//! Owns the whole session state: current view and input modality, the
//! displayed report, the chat transcript, history, theme, and the dictation
//! machine. The REPL translates lines into controller calls and prints the
//! outcomes; all service access goes through the trait seams so tests can
//! run against mocks.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;
use trustai_core::app_state::{AppState, Theme};
use trustai_core::chat::ChatMessage;
use trustai_core::dictation::{DictationMachine, TranscriptEvent, VoiceTransport};
use trustai_core::history::HistoryItem;
use trustai_core::input::AnalysisInput;
use trustai_core::nav::{InputMode, NavAction, View};
use trustai_core::report::ReportData;
use trustai_core::service::{ContentAnalyzer, NavCommandInterpreter, ReportChat};
use trustai_core::{Result, TrustAiError};
use trustai_infrastructure::{HistoryStore, StateStore};

/// Greeting printed the first time the quick-nav channel is used.
pub const NAV_GREETING: &str =
    r#"How can I help? (e.g., "go to learn page" or "how does this work?")"#;

/// Confirmation printed when a nav command resolved to an action.
pub const NAV_PERFORMED: &str = "Sure, I've handled that for you.";

/// Printed when the interpreter could not map the command to anything.
pub const NAV_UNKNOWN: &str = "Sorry, I didn't understand that. You can ask me to navigate to a \
     page, toggle the theme, or ask questions about how I work.";

/// Greeting printed the first time the report chat is used.
pub const CHAT_GREETING: &str = "Hi! I'm your Trust AI assistant. Ask me anything about this \
     report, or general questions about misinformation.";

/// Synthetic assistant reply shown when the chat service itself failed.
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I couldn't get a response. Please try again.";

const EMPTY_SUBMISSION: &str = "Please provide content to analyze.";
const BUSY_NOTICE: &str = "A request is already in progress. Please wait for it to finish.";
const NO_REPORT_FOR_CHAT: &str =
    "There is no report to discuss yet. Run an analysis first, then ask follow-up questions.";
const VOICE_UNAVAILABLE: &str =
    "Voice dictation is not configured. Set a transcriber command under [voice] in config.toml.";

const VOICE_CHANNEL_CAPACITY: usize = 32;

/// What the REPL should print after a nav command.
#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    /// The action was recognized and applied.
    Performed,
    /// The model answered a question instead of acting.
    Answer(String),
    /// Nothing matched.
    NotUnderstood,
}

/// A user-visible consequence of a voice transport event.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceUpdate {
    /// The draft was replaced with this full text.
    Draft(String),
    /// Dictation ended with an error and will not restart.
    Error(String),
}

pub struct AppController {
    analyzer: Arc<dyn ContentAnalyzer>,
    interpreter: Arc<dyn NavCommandInterpreter>,
    chat_service: Arc<dyn ReportChat>,
    voice: Option<Arc<dyn VoiceTransport>>,
    history_store: HistoryStore,
    state_store: StateStore,
    state: AppState,
    view: View,
    input_mode: InputMode,
    busy: bool,
    report: Option<ReportData>,
    history: Vec<HistoryItem>,
    chat_transcript: Vec<ChatMessage>,
    chat_greeted: bool,
    nav_greeted: bool,
    pending_input: String,
    dictation: DictationMachine,
    voice_tx: mpsc::Sender<TranscriptEvent>,
    voice_rx: Option<mpsc::Receiver<TranscriptEvent>>,
}

impl AppController {
    /// Builds a controller, loading the persisted theme and history.
    pub fn new(
        analyzer: Arc<dyn ContentAnalyzer>,
        interpreter: Arc<dyn NavCommandInterpreter>,
        chat_service: Arc<dyn ReportChat>,
        voice: Option<Arc<dyn VoiceTransport>>,
        history_store: HistoryStore,
        state_store: StateStore,
    ) -> Self {
        let state = state_store.load();
        let history = history_store.load();
        let (voice_tx, voice_rx) = mpsc::channel(VOICE_CHANNEL_CAPACITY);
        Self {
            analyzer,
            interpreter,
            chat_service,
            voice,
            history_store,
            state_store,
            state,
            view: View::Analyzer,
            input_mode: InputMode::Text,
            busy: false,
            report: None,
            history,
            chat_transcript: Vec::new(),
            chat_greeted: false,
            nav_greeted: false,
            pending_input: String::new(),
            dictation: DictationMachine::new(),
            voice_tx,
            voice_rx: Some(voice_rx),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn report(&self) -> Option<&ReportData> {
        self.report.as_ref()
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn chat_transcript(&self) -> &[ChatMessage] {
        &self.chat_transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_listening(&self) -> bool {
        self.dictation.is_listening()
    }

    pub fn voice_available(&self) -> bool {
        self.voice.is_some()
    }

    /// Hands out the transport event receiver exactly once; the REPL drives
    /// it from a background task.
    pub fn take_voice_events(&mut self) -> Option<mpsc::Receiver<TranscriptEvent>> {
        self.voice_rx.take()
    }

    /// Replaces the draft text. Edits made while dictation is listening are
    /// overwritten by the next transcript event.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Runs one credibility analysis and, on success, shows the report,
    /// records it in history, and resets any chat about the previous report.
    ///
    /// `source_name` is the file name used in the history summary for image
    /// and file submissions.
    pub async fn submit(&mut self, input: AnalysisInput, source_name: Option<&str>) -> Result<()> {
        if self.busy {
            return Err(TrustAiError::invalid_input(BUSY_NOTICE));
        }
        let empty = match &input {
            AnalysisInput::Text { content } | AnalysisInput::Url { content } => {
                content.trim().is_empty()
            }
            _ => false,
        };
        if empty {
            return Err(TrustAiError::invalid_input(EMPTY_SUBMISSION));
        }

        let summary = input.summary(source_name);
        self.busy = true;
        let outcome = self.analyzer.analyze(&input).await;
        self.busy = false;
        let report = outcome?;

        let item = HistoryItem::new(summary, report.clone());
        if let Err(error) = self.history_store.append(item.clone()) {
            warn!(%error, "failed to persist history entry");
        }
        self.history.insert(0, item);
        self.report = Some(report);
        self.reset_chat();
        self.pending_input.clear();
        self.view = View::Analyzer;
        Ok(())
    }

    /// Interprets a free-text command and applies the resulting action.
    pub async fn run_nav_command(&mut self, command: &str) -> NavOutcome {
        let action = self.interpreter.interpret(command).await;
        self.apply_nav_action(action)
    }

    pub fn apply_nav_action(&mut self, action: NavAction) -> NavOutcome {
        match action {
            NavAction::Navigate { target } => {
                self.go_to(target);
                NavOutcome::Performed
            }
            NavAction::ToggleTheme => {
                self.toggle_theme();
                NavOutcome::Performed
            }
            NavAction::SetInputType { target } => {
                self.set_input_mode(target);
                NavOutcome::Performed
            }
            NavAction::Answer { response } => NavOutcome::Answer(response),
            NavAction::Unknown => NavOutcome::NotUnderstood,
        }
    }

    /// Returns the quick-nav greeting on first use.
    pub fn nav_greeting(&mut self) -> Option<&'static str> {
        if self.nav_greeted {
            None
        } else {
            self.nav_greeted = true;
            Some(NAV_GREETING)
        }
    }

    /// Switches the visible view. Leaving the report's view discards the
    /// chat transcript.
    pub fn go_to(&mut self, view: View) {
        if view != self.view {
            self.view = view;
            self.reset_chat();
        }
    }

    /// Switches the input modality and clears the draft.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.pending_input.clear();
    }

    /// Toggles the theme and persists it.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.toggle_theme();
        if let Err(error) = self.state_store.save(&self.state) {
            warn!(%error, "failed to persist theme");
        }
        theme
    }

    /// Dismisses the current report and returns to the input state.
    pub fn close_report(&mut self) {
        self.report = None;
        self.reset_chat();
        self.pending_input.clear();
    }

    /// Returns the assistant greeting the first time chat is used for the
    /// current report. Presentational only; not part of the transcript sent
    /// to the model.
    pub fn chat_greeting(&mut self) -> Option<&'static str> {
        if self.report.is_none() || self.chat_greeted {
            return None;
        }
        self.chat_greeted = true;
        Some(CHAT_GREETING)
    }

    /// Sends one chat turn about the displayed report.
    ///
    /// Service failures degrade to [`CHAT_FALLBACK_REPLY`] so the
    /// conversation surface never shows a raw error.
    pub async fn chat(&mut self, message: &str) -> Result<String> {
        if self.busy {
            return Err(TrustAiError::invalid_input(BUSY_NOTICE));
        }
        let Some(report) = self.report.clone() else {
            return Err(TrustAiError::invalid_input(NO_REPORT_FOR_CHAT));
        };

        self.chat_transcript.push(ChatMessage::user(message));
        self.busy = true;
        let outcome = self.chat_service.reply(&self.chat_transcript, &report).await;
        self.busy = false;
        let reply = match outcome {
            Ok(text) => text,
            Err(error) => {
                warn!(%error, "chat service failed");
                CHAT_FALLBACK_REPLY.to_string()
            }
        };
        self.chat_transcript.push(ChatMessage::assistant(reply.clone()));
        Ok(reply)
    }

    /// Opens a past analysis in the analyzer view, exactly as a fresh
    /// result would be shown. `index` is zero-based, most recent first.
    pub fn open_history_entry(&mut self, index: usize) -> Result<()> {
        let item = self
            .history
            .get(index)
            .ok_or_else(|| TrustAiError::not_found("history entry", (index + 1).to_string()))?;
        self.report = Some(item.report.clone());
        self.view = View::Analyzer;
        self.reset_chat();
        self.pending_input.clear();
        Ok(())
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear();
        self.history_store
            .clear()
            .map_err(|e| TrustAiError::io(e.to_string()))
    }

    /// Starts dictating into the draft. The current draft becomes the fixed
    /// prefix for the whole session, including implicit restarts.
    pub async fn start_dictation(&mut self) -> Result<()> {
        let Some(transport) = self.voice.clone() else {
            return Err(TrustAiError::voice_transport(VOICE_UNAVAILABLE));
        };
        if self.dictation.is_listening() {
            return Err(TrustAiError::voice_transport("Dictation is already running."));
        }
        let session = self.dictation.start(&self.pending_input);
        if let Err(error) = transport.start(session, self.voice_tx.clone()).await {
            self.dictation.stop();
            return Err(error);
        }
        Ok(())
    }

    /// Explicit stop: no restart, trailing events from the session are
    /// dropped. The dictated draft stays in place for submission.
    pub async fn stop_dictation(&mut self) {
        self.dictation.stop();
        if let Some(transport) = self.voice.clone() {
            transport.stop().await;
        }
    }

    /// Applies one transport event, returning what the user should see.
    ///
    /// Transcript events replace the draft; a unilateral session end
    /// triggers a silent restart with the same prefix unless the user
    /// stopped explicitly; a failure forces dictation off.
    pub async fn on_voice_event(&mut self, event: TranscriptEvent) -> Option<VoiceUpdate> {
        match event {
            TranscriptEvent::Transcript { session, text } => {
                let updated = self.dictation.transcript(session, &text)?;
                self.pending_input = updated.clone();
                Some(VoiceUpdate::Draft(updated))
            }
            TranscriptEvent::Ended { session } => {
                let next_session = self.dictation.session_ended(session)?;
                let transport = self.voice.clone()?;
                match transport.start(next_session, self.voice_tx.clone()).await {
                    Ok(()) => None,
                    Err(error) => {
                        self.dictation.stop();
                        Some(VoiceUpdate::Error(error.to_string()))
                    }
                }
            }
            TranscriptEvent::Failed { session, message } => {
                if session != self.dictation.current_session() || !self.dictation.is_listening() {
                    return None;
                }
                self.dictation.stop();
                if let Some(transport) = self.voice.clone() {
                    transport.stop().await;
                }
                Some(VoiceUpdate::Error(message))
            }
        }
    }

    fn reset_chat(&mut self) {
        self.chat_transcript.clear();
        self.chat_greeted = false;
    }

    #[cfg(test)]
    fn force_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
