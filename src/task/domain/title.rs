//! Validated task title.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-blank task title between three and 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Minimum title length in characters.
    pub const MIN_CHARS: usize = 3;

    /// Maximum title length in characters; matches the `tasks.title` column.
    pub const MAX_CHARS: usize = 255;

    /// Creates a validated title.
    ///
    /// Surrounding whitespace is trimmed before the length checks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooShort`] or
    /// [`TaskDomainError::TitleTooLong`] when the trimmed length is outside
    /// the accepted range.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let length = trimmed.chars().count();
        if length < Self::MIN_CHARS {
            return Err(TaskDomainError::TitleTooShort {
                min: Self::MIN_CHARS,
            });
        }
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::TitleTooLong {
                max: Self::MAX_CHARS,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
