//! Domain model for task management.
//!
//! Tasks carry a validated title, optional free-text description, a status,
//! and an optional priority. All infrastructure concerns stay outside of the
//! domain boundary.

mod error;
mod ids;
mod priority;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use task::{FieldChange, NewTask, PersistedTaskData, Task, TaskChanges, TaskStatus};
pub use title::TaskTitle;
