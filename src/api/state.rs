//! Shared handler state.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::assist::{
    ports::CompletionProvider,
    services::{PromptBook, TaskAssistant},
};
use crate::task::{ports::TaskRepository, services::TaskService};

/// Task service over whichever store the process was configured with.
pub type SharedTaskService = TaskService<dyn TaskRepository, DefaultClock>;

/// Assistant over whichever completion provider the process was configured
/// with.
pub type SharedAssistant = TaskAssistant<dyn CompletionProvider>;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Task CRUD service.
    pub tasks: SharedTaskService,
    /// Model-backed helpers.
    pub assistant: SharedAssistant,
}

impl AppState {
    /// Wires the services over `repository` and `provider`.
    #[must_use]
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        provider: Arc<dyn CompletionProvider>,
        prompts: PromptBook,
    ) -> Self {
        Self {
            tasks: TaskService::new(repository, Arc::new(DefaultClock)),
            assistant: TaskAssistant::new(provider, prompts),
        }
    }
}
