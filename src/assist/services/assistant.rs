//! Task assistant orchestration service.

use super::prompts::PromptBook;
use super::replies::parse_priority_suggestions;
use crate::assist::{
    domain::PrioritySuggestion,
    ports::{CompletionError, CompletionProvider},
};
use crate::task::domain::Task;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Fixed reply for a summary request with no pending tasks.
pub const NO_PENDING_TASKS_MESSAGE: &str = "No hay tareas pendientes. ¡Excelente trabajo!";

/// Service-level errors for assistant operations.
#[derive(Debug, Error)]
pub enum AssistError {
    /// The completion provider failed; passed through unchanged.
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// The reply contained a bracketed span that is not a suggestion array.
    #[error("malformed priority suggestions in model reply: {0}")]
    MalformedSuggestions(#[source] serde_json::Error),

    /// A prompt template failed to render.
    #[error("prompt rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Result type for assistant operations.
pub type AssistResult<T> = Result<T, AssistError>;

/// Builds prompts from tasks, calls the completion provider once per
/// operation, and shapes the reply for the caller.
///
/// The assistant holds no per-call state; concurrent calls are independent.
pub struct TaskAssistant<P>
where
    P: CompletionProvider + ?Sized,
{
    provider: Arc<P>,
    prompts: PromptBook,
}

impl<P> Clone for TaskAssistant<P>
where
    P: CompletionProvider + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            prompts: self.prompts.clone(),
        }
    }
}

impl<P> TaskAssistant<P>
where
    P: CompletionProvider + ?Sized,
{
    /// Creates an assistant over `provider` using `prompts`.
    #[must_use]
    pub const fn new(provider: Arc<P>, prompts: PromptBook) -> Self {
        Self { provider, prompts }
    }

    /// Produces an executive summary of `tasks`.
    ///
    /// `tasks` should already be restricted to pending work. An empty slice
    /// returns [`NO_PENDING_TASKS_MESSAGE`] without calling the provider;
    /// otherwise the reply is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Completion`] when the provider fails.
    pub async fn summarize(&self, tasks: &[Task]) -> AssistResult<String> {
        if tasks.is_empty() {
            debug!("no pending tasks, skipping summary completion");
            return Ok(NO_PENDING_TASKS_MESSAGE.to_owned());
        }

        let prompt = self.prompts.summary(tasks)?;
        debug!(task_count = tasks.len(), "requesting task summary");
        Ok(self.provider.complete(&prompt).await?)
    }

    /// Asks the model for a 1-5 priority per task.
    ///
    /// An empty slice returns an empty list without calling the provider. A
    /// reply with no bracketed array also yields an empty list. Suggestions
    /// are returned exactly as decoded: ids are not matched against `tasks`
    /// and priorities are not range-checked.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Completion`] when the provider fails, or
    /// [`AssistError::MalformedSuggestions`] when the reply holds a bracketed
    /// span that does not decode.
    pub async fn suggest_priorities(&self, tasks: &[Task]) -> AssistResult<Vec<PrioritySuggestion>> {
        if tasks.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = self.prompts.priorities(tasks)?;
        debug!(task_count = tasks.len(), "requesting priority suggestions");
        let reply = self.provider.complete(&prompt).await?;

        match parse_priority_suggestions(&reply).map_err(AssistError::MalformedSuggestions)? {
            Some(suggestions) => Ok(suggestions),
            None => {
                warn!("model reply contained no suggestion array");
                Ok(Vec::new())
            }
        }
    }

    /// Drafts a short description for a task titled `title`.
    ///
    /// The reply is trimmed and otherwise returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AssistError::Completion`] when the provider fails.
    pub async fn autocomplete_description(&self, title: &str) -> AssistResult<String> {
        let prompt = self.prompts.description(title)?;
        debug!("requesting description draft");
        let reply = self.provider.complete(&prompt).await?;
        Ok(reply.trim().to_owned())
    }
}
