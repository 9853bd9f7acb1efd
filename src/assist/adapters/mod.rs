//! Completion provider adapters.

pub mod gemini;
pub mod scripted;

pub use gemini::GeminiCompletionProvider;
pub use scripted::ScriptedCompletionProvider;
