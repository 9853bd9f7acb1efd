//! Task priority scale.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority from 1 (most urgent) to 5 (least urgent).
///
/// Every priority written to storage passes through [`TaskPriority::new`], so
/// values proposed by external sources are range-checked before they land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TaskPriority(u8);

impl TaskPriority {
    /// Most urgent priority.
    pub const HIGHEST: Self = Self(1);

    /// Least urgent priority.
    pub const LOWEST: Self = Self(5);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::PriorityOutOfRange`] when `value` is not in
    /// `1..=5`.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        match u8::try_from(value) {
            Ok(level) if (Self::HIGHEST.0..=Self::LOWEST.0).contains(&level) => Ok(Self(level)),
            _ => Err(TaskDomainError::PriorityOutOfRange(value)),
        }
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for TaskPriority {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskPriority> for i64 {
    fn from(priority: TaskPriority) -> Self {
        Self::from(priority.0)
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
