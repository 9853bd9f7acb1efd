//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskwise::{
    assist::{
        adapters::ScriptedCompletionProvider,
        services::{DEFAULT_LANGUAGE, PromptBook, TaskAssistant},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{CreateTaskRequest, TaskService},
    },
};

/// Task service over an in-memory store.
pub type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Assistant over a scripted provider.
pub type TestAssistant = TaskAssistant<ScriptedCompletionProvider>;

/// Provides a task service over a fresh, empty store.
#[fixture]
pub fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Builds an assistant over `provider` with the default prompt language.
///
/// # Errors
///
/// Returns an error if the built-in templates fail to parse.
pub fn assistant(provider: &ScriptedCompletionProvider) -> Result<TestAssistant, eyre::Report> {
    Ok(TaskAssistant::new(
        Arc::new(provider.clone()),
        PromptBook::new(DEFAULT_LANGUAGE)?,
    ))
}

/// Creates one task per title, in order.
///
/// # Errors
///
/// Returns an error if any creation fails.
pub async fn seed(service: &TestService, titles: &[&str]) -> Result<Vec<Task>, eyre::Report> {
    let mut created = Vec::with_capacity(titles.len());
    for title in titles {
        created.push(service.create(CreateTaskRequest::new(*title)).await?);
    }
    Ok(created)
}
