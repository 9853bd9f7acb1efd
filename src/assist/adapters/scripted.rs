//! Scripted completion provider for tests and offline runs.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::assist::ports::{CompletionError, CompletionProvider, CompletionResult};

/// Completion provider that replays queued replies and records every prompt.
///
/// When the queue runs dry the fallback reply is returned, so a provider
/// built with [`ScriptedCompletionProvider::always`] answers indefinitely.
#[derive(Debug, Clone, Default)]
pub struct ScriptedCompletionProvider {
    state: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    replies: VecDeque<CompletionResult<String>>,
    fallback: Option<String>,
    prompts: Vec<String>,
}

impl ScriptedCompletionProvider {
    /// Creates a provider with no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider that answers every prompt with `reply`.
    #[must_use]
    pub fn always(reply: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.lock().fallback = Some(reply.into());
        provider
    }

    /// Queues a successful reply.
    #[must_use]
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.push_reply(reply);
        self
    }

    /// Queues a successful reply on a provider that is already shared.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.lock().replies.push_back(Ok(reply.into()));
    }

    /// Queues a failure.
    #[must_use]
    pub fn with_failure(self, error: CompletionError) -> Self {
        self.lock().replies.push_back(Err(error));
        self
    }

    /// Returns every prompt received so far, oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Returns the number of completion calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl CompletionProvider for ScriptedCompletionProvider {
    async fn complete(&self, prompt: &str) -> CompletionResult<String> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_owned());
        match state.replies.pop_front() {
            Some(reply) => reply,
            None => state.fallback.clone().ok_or_else(|| CompletionError::Api {
                status: 503,
                message: "no scripted reply left".to_owned(),
            }),
        }
    }
}
