//! Port contracts for the task assistant.

pub mod completion;

#[cfg(test)]
pub use completion::MockCompletionProvider;
pub use completion::{CompletionError, CompletionProvider, CompletionResult};
