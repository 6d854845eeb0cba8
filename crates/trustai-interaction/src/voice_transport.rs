//! Process-backed voice transport.
//!
//! Spawns a user-configured transcriber command and turns its stdout into
//! transcript events. Each stdout line is one transcript segment; the
//! transport accumulates segments and emits the full session transcript so
//! far, which is what the dictation machine expects.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::debug;
use trustai_core::dictation::{TranscriptEvent, VoiceTransport};
use trustai_core::{Result, TrustAiError};
use trustai_infrastructure::config_storage::VoiceSettings;

/// Transport that reads transcripts from a spawned process.
///
/// The command line is split on whitespace; quoting is not interpreted, so
/// wrap complex invocations in a script.
pub struct ProcessVoiceTransport {
    command: String,
    cancel: Mutex<Option<CancellationToken>>,
}

impl ProcessVoiceTransport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            cancel: Mutex::new(None),
        }
    }

    /// Builds a transport from the `[voice]` config section, or `None` when
    /// no command is configured.
    pub fn from_settings(settings: &VoiceSettings) -> Option<Self> {
        settings
            .command
            .as_ref()
            .filter(|command| !command.trim().is_empty())
            .map(Self::new)
    }
}

#[async_trait]
impl VoiceTransport for ProcessVoiceTransport {
    async fn start(&self, session: u64, events: mpsc::Sender<TranscriptEvent>) -> Result<()> {
        let mut words = self.command.split_whitespace();
        let program = words
            .next()
            .ok_or_else(|| TrustAiError::voice_transport("No dictation command configured"))?;

        let mut child = Command::new(program)
            .args(words)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                TrustAiError::voice_transport(format!("Could not start voice recognition: {e}"))
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            TrustAiError::voice_transport("Could not capture transcriber output")
        })?;

        let token = CancellationToken::new();
        {
            let mut guard = self.cancel.lock().await;
            if let Some(previous) = guard.replace(token.clone()) {
                previous.cancel();
            }
        }

        debug!(session, "voice transport session started");

        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            let mut transcript = String::new();

            loop {
                tokio::select! {
                    _ = token.cancelled() => {
                        // Explicit stop: kill the transcriber and go quiet.
                        let _ = child.kill().await;
                        return;
                    }
                    line = lines.next_line() => match line {
                        Ok(Some(line)) => {
                            let segment = line.trim();
                            if segment.is_empty() {
                                continue;
                            }
                            if !transcript.is_empty() {
                                transcript.push(' ');
                            }
                            transcript.push_str(segment);
                            let event = TranscriptEvent::Transcript {
                                session,
                                text: transcript.clone(),
                            };
                            if events.send(event).await.is_err() {
                                return;
                            }
                        }
                        Ok(None) => break,
                        Err(e) => {
                            let event = TranscriptEvent::Failed {
                                session,
                                message: format!("Voice transport read error: {e}"),
                            };
                            let _ = events.send(event).await;
                            return;
                        }
                    }
                }
            }

            // Stdout closed; the exit status decides between a clean session
            // end and a fatal transport error.
            let event = match child.wait().await {
                Ok(status) if status.success() => TranscriptEvent::Ended { session },
                Ok(status) => TranscriptEvent::Failed {
                    session,
                    message: format!("Transcriber exited with {status}"),
                },
                Err(e) => TranscriptEvent::Failed {
                    session,
                    message: format!("Failed to wait for transcriber: {e}"),
                },
            };
            let _ = events.send(event).await;
        });

        Ok(())
    }

    async fn stop(&self) {
        let token = self.cancel.lock().await.take();
        if let Some(token) = token {
            token.cancel();
        }
    }
}
