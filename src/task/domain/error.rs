//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is shorter than the minimum length after trimming.
    #[error("title must be longer than or equal to {min} characters")]
    TitleTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// The title exceeds the persisted column width.
    #[error("title must be shorter than or equal to {max} characters")]
    TitleTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// The priority is outside the accepted `1..=5` range.
    #[error("priority must be an integer between 1 and 5, got {0}")]
    PriorityOutOfRange(i64),

    /// The status value is not one of the known states.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("status must be one of PENDING, IN_PROGRESS, COMPLETED, got '{0}'")]
pub struct ParseTaskStatusError(pub String);
