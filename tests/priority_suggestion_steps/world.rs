//! Shared world state for priority suggestion BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use taskwise::{
    assist::{
        adapters::ScriptedCompletionProvider,
        domain::PrioritySuggestion,
        services::{AssistResult, DEFAULT_LANGUAGE, PromptBook, TaskAssistant},
    },
    task::{adapters::memory::InMemoryTaskRepository, domain::Task, services::TaskService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for priority suggestion behaviour tests.
pub struct PrioritySuggestionWorld {
    pub service: TestTaskService,
    pub provider: ScriptedCompletionProvider,
    pub assistant: TaskAssistant<ScriptedCompletionProvider>,
    pub tasks: Vec<Task>,
    pub scripted_suggestions: Vec<Value>,
    pub raw_reply: Option<String>,
    pub last_result: Option<AssistResult<Vec<PrioritySuggestion>>>,
    pub rejected: usize,
}

impl PrioritySuggestionWorld {
    /// Creates a world with an empty store and an unscripted provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in prompt templates fail to parse.
    pub fn new() -> Result<Self, eyre::Report> {
        let provider = ScriptedCompletionProvider::new();
        Ok(Self {
            service: TaskService::new(
                Arc::new(InMemoryTaskRepository::new()),
                Arc::new(DefaultClock),
            ),
            assistant: TaskAssistant::new(
                Arc::new(provider.clone()),
                PromptBook::new(DEFAULT_LANGUAGE)?,
            ),
            provider,
            tasks: Vec::new(),
            scripted_suggestions: Vec::new(),
            raw_reply: None,
            last_result: None,
            rejected: 0,
        })
    }

    /// Finds a created task by title.
    ///
    /// # Errors
    ///
    /// Returns an error if no task in the scenario has `title`.
    pub fn task_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.tasks
            .iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
#[expect(
    clippy::expect_used,
    reason = "Fixtures cannot propagate errors to the scenario"
)]
pub fn world() -> PrioritySuggestionWorld {
    PrioritySuggestionWorld::new().expect("scenario world builds")
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
