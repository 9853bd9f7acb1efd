//! Domain types produced by the task assistant.

mod suggestion;

pub use suggestion::PrioritySuggestion;
