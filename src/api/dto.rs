//! Request and response bodies.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::ApiError;
use crate::task::{
    domain::{Task, TaskId, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest},
};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Title; 3 to 255 characters after trimming.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial status; `PENDING` when omitted.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Initial priority, 1 to 5.
    #[serde(default)]
    pub priority: Option<i64>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        let mut request = Self::new(body.title);
        if let Some(description) = body.description {
            request = request.with_description(description);
        }
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        if let Some(priority) = body.priority {
            request = request.with_priority(priority);
        }
        request
    }
}

/// Body of `PATCH /tasks/{id}`.
///
/// An absent field is left unchanged. An explicit `null` clears
/// `description` and `priority`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<TaskStatus>,
    /// Replacement priority, or `Some(None)` to clear it.
    #[serde(default, deserialize_with = "nullable")]
    pub priority: Option<Option<i64>>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        let mut request = Self::new();
        if let Some(title) = body.title {
            request = request.with_title(title);
        }
        request = match body.description {
            None => request,
            Some(None) => request.clear_description(),
            Some(Some(description)) => request.with_description(description),
        };
        if let Some(status) = body.status {
            request = request.with_status(status);
        }
        match body.priority {
            None => request,
            Some(None) => request.clear_priority(),
            Some(Some(priority)) => request.with_priority(priority),
        }
    }
}

/// Distinguishes an explicit `null` from an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query string of `GET /tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTasksQuery {
    /// Status filter, matched case-insensitively.
    #[serde(default)]
    pub status: Option<String>,
}

impl ListTasksQuery {
    /// Parses the status filter.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] for an unknown status.
    pub fn status(&self) -> Result<Option<TaskStatus>, ApiError> {
        self.status
            .as_deref()
            .map(str::parse::<TaskStatus>)
            .transpose()
            .map_err(|err| ApiError::bad_request(err.to_string()))
    }
}

/// Task as returned by every task route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description, `null` when absent.
    pub description: Option<String>,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority, `null` when unset.
    pub priority: Option<TaskPriority>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            status: task.status(),
            priority: task.priority(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Body of `POST /ai/priorities`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestPrioritiesBody {
    /// Tasks to rank.
    pub task_ids: Vec<String>,
}

impl SuggestPrioritiesBody {
    /// Parses every entry as a version 4 UUID.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] when any entry is not a v4 UUID.
    pub fn task_ids(&self) -> Result<Vec<TaskId>, ApiError> {
        self.task_ids
            .iter()
            .map(|raw| {
                Uuid::parse_str(raw)
                    .ok()
                    .filter(|uuid| uuid.get_version_num() == 4)
                    .map(TaskId::from_uuid)
                    .ok_or_else(|| ApiError::bad_request("each value in taskIds must be a UUID"))
            })
            .collect()
    }
}

/// Body of `POST /ai/autocomplete`.
#[derive(Debug, Clone, Deserialize)]
pub struct AutoCompleteBody {
    /// Title to draft a description for.
    pub title: String,
}

impl AutoCompleteBody {
    /// Returns the title, rejecting an empty string.
    ///
    /// # Errors
    ///
    /// Returns a 400 [`ApiError`] when the title is empty.
    pub fn title(&self) -> Result<&str, ApiError> {
        if self.title.is_empty() {
            return Err(ApiError::bad_request("title should not be empty"));
        }
        Ok(&self.title)
    }
}

/// Reply of `GET /ai/summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Model-written summary, or the fixed no-pending-tasks message.
    pub summary: String,
}

/// Reply of `POST /ai/autocomplete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoCompleteResponse {
    /// Drafted description.
    pub description: String,
}

/// Parses a path segment as a task identifier.
///
/// # Errors
///
/// Returns a 400 [`ApiError`] when `raw` is not a UUID.
pub fn parse_task_id(raw: &str) -> Result<TaskId, ApiError> {
    raw.parse::<TaskId>()
        .map_err(|_| ApiError::bad_request("Validation failed (uuid is expected)"))
}
