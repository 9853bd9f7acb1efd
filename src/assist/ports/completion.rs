//! Text-completion provider port.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for completion provider calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// A black-box text-completion capability: one prompt in, one reply out.
///
/// Implementations are configured once (model, credentials) and hold no
/// per-call state. Callers issue exactly one request per operation and get
/// the full reply; there is no streaming, retry, or caching at this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends `prompt` to the model and returns the raw reply text.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError`] when the provider is unreachable or
    /// refuses the request.
    async fn complete(&self, prompt: &str) -> CompletionResult<String>;
}

/// Errors returned by completion provider adapters.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// The request could not be sent or the reply could not be read.
    #[error("completion transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The provider answered with a non-success status.
    #[error("completion provider returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Provider error message, or the raw body when it has none.
        message: String,
    },

    /// The provider refused to answer the prompt.
    #[error("completion blocked by provider: {0}")]
    Blocked(String),

    /// The provider reply did not have the documented envelope.
    #[error("unreadable completion envelope: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl CompletionError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps an envelope decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
