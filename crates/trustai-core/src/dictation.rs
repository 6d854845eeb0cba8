//! Voice dictation state machine and transport seam.
//!
//! The machine overlays a continuous speech-to-text session onto a text
//! field: when a session starts, the field's current content is captured
//! once as an immutable prefix, and every transcript event replaces the
//! field with `prefix + session transcript so far`. The transport may end a
//! session unilaterally (provider-side timeout); unless the user stopped
//! explicitly, the machine restarts with the *same* prefix. Text typed
//! manually between a transport-forced end and the next transcript event is
//! overwritten; known limitation, carried over from the product behavior.
//!
//! Stale-event protection is two-fold: an explicit-stop flag, and a
//! monotonically increasing session id stamped on every event so a
//! superseded session can never mutate the field.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::Result;

/// The two observable dictation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictationState {
    Idle,
    Listening,
}

/// One asynchronous event produced by a listening session.
///
/// `session` is the id handed out when the session started; the machine
/// ignores events stamped with a superseded id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// The full transcript of the session so far. Each event supersedes the
    /// previous one; it is not a delta.
    Transcript { session: u64, text: String },
    /// The transport ended the session on its own (e.g. provider timeout).
    Ended { session: u64 },
    /// A fatal transport condition. No restart is attempted afterwards.
    Failed { session: u64, message: String },
}

/// Capability seam over the underlying speech-to-text resource.
///
/// Implementations stamp every event they emit with the `session` id passed
/// to [`VoiceTransport::start`] and send events through the given channel in
/// arrival order.
#[async_trait]
pub trait VoiceTransport: Send + Sync {
    /// Begins a listening session. A fatal startup failure (e.g. the
    /// transcriber binary cannot be spawned) is returned as an error; later
    /// conditions are reported through the event channel.
    async fn start(&self, session: u64, events: mpsc::Sender<TranscriptEvent>) -> Result<()>;

    /// Tears down the active session, releasing the underlying resource.
    /// Idempotent; safe to call with no session running.
    async fn stop(&self);
}

/// The dictation state machine. Pure state; the caller owns the transport
/// and funnels its events in.
#[derive(Debug)]
pub struct DictationMachine {
    state: DictationState,
    /// Field content captured at session start, trimmed, with a single
    /// trailing space when non-empty. Fixed across implicit restarts.
    prefix: String,
    /// Set on explicit stop and on fatal transport errors; suppresses
    /// auto-restart and drops trailing events.
    explicit_stop: bool,
    session_counter: AtomicU64,
    current_session: u64,
}

impl Default for DictationMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DictationMachine {
    pub fn new() -> Self {
        Self {
            state: DictationState::Idle,
            prefix: String::new(),
            explicit_stop: false,
            session_counter: AtomicU64::new(0),
            current_session: 0,
        }
    }

    pub fn state(&self) -> DictationState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == DictationState::Listening
    }

    /// The id of the session currently allowed to mutate the field.
    pub fn current_session(&self) -> u64 {
        self.current_session
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Starts listening, capturing `current_text` as the immutable prefix.
    /// Returns the new session id.
    pub fn start(&mut self, current_text: &str) -> u64 {
        let existing = current_text.trim();
        self.prefix = if existing.is_empty() {
            String::new()
        } else {
            format!("{existing} ")
        };
        self.explicit_stop = false;
        self.state = DictationState::Listening;
        self.mint_session()
    }

    /// User-initiated stop. Sets the explicit-stop flag so trailing events
    /// from the session are dropped and no restart happens.
    pub fn stop(&mut self) {
        self.explicit_stop = true;
        self.state = DictationState::Idle;
    }

    /// Applies a transcript event, returning the full replacement text for
    /// the field, or `None` when the event must be ignored (stopped, stale
    /// session, or not listening).
    pub fn transcript(&mut self, session: u64, text: &str) -> Option<String> {
        if !self.is_listening() || self.explicit_stop || session != self.current_session {
            return None;
        }
        Some(format!("{}{}", self.prefix, text))
    }

    /// Handles a transport-initiated session end. When the stop flag is not
    /// set, the machine immediately enters a new session with the same
    /// prefix and returns its id so the caller can restart the transport;
    /// otherwise (or for a stale session) it returns `None`.
    pub fn session_ended(&mut self, session: u64) -> Option<u64> {
        if session != self.current_session {
            return None;
        }
        if self.explicit_stop {
            self.state = DictationState::Idle;
            return None;
        }
        Some(self.mint_session())
    }

    fn mint_session(&mut self) -> u64 {
        let id = self.session_counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.current_session = id;
        id
    }
}
