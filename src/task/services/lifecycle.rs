//! Service layer for task creation, retrieval, updates, and removal.

use crate::task::{
    domain::{
        FieldChange, NewTask, Task, TaskChanges, TaskDomainError, TaskId, TaskPriority,
        TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use futures::future::try_join_all;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<i64>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the initial priority; validated when the request is executed.
    #[must_use]
    pub const fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    fn validate(self) -> Result<NewTask, TaskDomainError> {
        let mut draft = NewTask::new(TaskTitle::new(self.title)?);
        draft.description = self.description;
        draft.status = self.status.unwrap_or_default();
        draft.priority = self.priority.map(TaskPriority::new).transpose()?;
        Ok(draft)
    }
}

/// Request payload for a partial task update.
///
/// Fields left untouched keep their stored value. Description and priority
/// can additionally be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: FieldChange<String>,
    status: Option<TaskStatus>,
    priority: FieldChange<i64>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = FieldChange::Set(description.into());
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = FieldChange::Clear;
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority; validated when the request is executed.
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = FieldChange::Set(priority);
        self
    }

    /// Removes the priority.
    #[must_use]
    pub fn clear_priority(mut self) -> Self {
        self.priority = FieldChange::Clear;
        self
    }

    fn validate(self) -> Result<TaskChanges, TaskDomainError> {
        let priority = match self.priority {
            FieldChange::Keep => FieldChange::Keep,
            FieldChange::Clear => FieldChange::Clear,
            FieldChange::Set(level) => FieldChange::Set(TaskPriority::new(level)?),
        };
        Ok(TaskChanges {
            title: self.title.map(TaskTitle::new).transpose()?,
            description: self.description,
            status: self.status,
            priority,
        })
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested task does not exist.
    #[error("Task with ID \"{0}\" not found")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when input validation fails or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let draft = request.validate()?;
        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), status = %task.status(), "task created");
        Ok(task)
    }

    /// Lists tasks newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(status).await?)
    }

    /// Lists tasks that have not been started yet, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn pending(&self) -> TaskServiceResult<Vec<Task>> {
        self.list(Some(TaskStatus::Pending)).await
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the identifier.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Retrieves several tasks concurrently, preserving the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] for the first missing
    /// identifier; no partial result is returned.
    pub async fn get_many(&self, ids: &[TaskId]) -> TaskServiceResult<Vec<Task>> {
        try_join_all(ids.iter().map(|id| self.get(*id))).await
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// or [`TaskServiceError::Domain`] when a field fails validation.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        let changes = request.validate()?;
        let mut task = self.get(id).await?;
        task.apply(changes, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, status = %task.status(), "task updated");
        Ok(task)
    }

    /// Sets a task's priority, rejecting values outside `1..=5`.
    ///
    /// This is the write path for accepted priority suggestions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] for an out-of-range value, or
    /// [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn update_priority(&self, id: TaskId, priority: i64) -> TaskServiceResult<Task> {
        let level = TaskPriority::new(priority)?;
        let mut task = self.get(id).await?;
        task.set_priority(level, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, priority = %level, "task priority updated");
        Ok(task)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }
}
