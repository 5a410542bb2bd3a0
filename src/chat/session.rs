use super::{
    pipeline::ChatPipeline,
    types::{Message, Role, Transcript},
};
use crate::{Error, Result};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct SessionState {
    transcript: Transcript,
    pending: bool,
}

/// The single conversation: transcript plus the in-flight flag.
///
/// The lock is only held for bookkeeping, never across the remote call.
pub struct ChatSession {
    pipeline: ChatPipeline,
    state: Mutex<SessionState>,
}

/// Closes an open turn. If the turn is dropped before a reply arrives, the
/// fallback message is appended so every user turn gets its assistant turn.
struct TurnGuard<'a> {
    state: &'a Mutex<SessionState>,
    fallback: &'a str,
    finished: bool,
}

impl TurnGuard<'_> {
    fn close(&self, content: String) -> Message {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        state.pending = false;
        state.transcript.push(Role::Assistant, content)
    }

    fn finish(mut self, content: String) -> Message {
        self.finished = true;
        self.close(content)
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Chat turn abandoned before a reply, appending fallback");
            self.close(self.fallback.to_string());
        }
    }
}

impl ChatSession {
    pub fn new(pipeline: ChatPipeline) -> Self {
        let mut transcript = Transcript::new();
        if let Some(greeting) = &pipeline.chat_config().greeting {
            transcript.push(Role::Assistant, greeting.clone());
        }

        Self {
            pipeline,
            state: Mutex::new(SessionState {
                transcript,
                pending: false,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SessionState>> {
        self.state
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))
    }

    /// Runs one user turn through the pipeline.
    ///
    /// Returns `Ok(None)` for blank input, `Err(RequestInFlight)` while another
    /// turn is pending, and otherwise the assistant turn that was appended. A
    /// failed remote call still appends exactly one assistant turn carrying the
    /// fallback message, and so does a turn whose future is dropped mid-call.
    pub async fn submit(&self, input: &str) -> Result<Option<Message>> {
        let Some(prior) = self.begin_turn(input)? else {
            debug!("Ignoring empty submission");
            return Ok(None);
        };
        let fallback = &self.pipeline.chat_config().fallback_message;
        let guard = TurnGuard {
            state: &self.state,
            fallback,
            finished: false,
        };

        let content = match self.pipeline.send_turn(input, &prior).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chat turn failed, replying with fallback: {}", e);
                fallback.clone()
            }
        };

        let message = guard.finish(content);

        info!("Appended assistant turn {}", message.id);
        Ok(Some(message))
    }

    /// Appends the user turn and marks the session pending, returning the
    /// transcript as it stood before the new turn.
    fn begin_turn(&self, input: &str) -> Result<Option<Vec<Message>>> {
        let mut state = self.lock()?;
        if state.pending {
            return Err(Error::RequestInFlight);
        }
        if input.trim().is_empty() {
            return Ok(None);
        }

        let prior = state.transcript.messages().to_vec();
        state.transcript.push(Role::User, input);
        state.pending = true;
        Ok(Some(prior))
    }

    pub fn transcript(&self) -> Result<Vec<Message>> {
        Ok(self.lock()?.transcript.messages().to_vec())
    }

    pub fn is_pending(&self) -> Result<bool> {
        Ok(self.lock()?.pending)
    }

    /// Starter prompts, offered until the user has said something.
    pub fn suggestions(&self) -> Result<Vec<String>> {
        let state = self.lock()?;
        if state.pending || state.transcript.has_user_turn() {
            return Ok(Vec::new());
        }
        Ok(self.pipeline.chat_config().suggestions.clone())
    }
}
