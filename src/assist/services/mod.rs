//! Prompt rendering, reply parsing, and the task assistant service.

mod assistant;
pub mod prompts;
pub mod replies;

pub use assistant::{AssistError, AssistResult, NO_PENDING_TASKS_MESSAGE, TaskAssistant};
pub use prompts::{DEFAULT_LANGUAGE, PromptBook};
