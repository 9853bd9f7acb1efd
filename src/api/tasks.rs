//! Task CRUD handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use super::{
    ApiError, AppState,
    dto::{CreateTaskBody, ListTasksQuery, TaskResponse, UpdateTaskBody, parse_task_id},
};

type TaskReply = Result<Json<TaskResponse>, ApiError>;

pub(super) async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let Json(body) = body?;
    let task = state.tasks.create(body.into()).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(&task))))
}

pub(super) async fn list_tasks(
    State(state): State<AppState>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let Query(query) = query?;
    let tasks = state.tasks.list(query.status()?).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}

pub(super) async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> TaskReply {
    let task = state.tasks.get(parse_task_id(&id)?).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> TaskReply {
    let task_id = parse_task_id(&id)?;
    let Json(body) = body?;
    let task = state.tasks.update(task_id, body.into()).await?;
    Ok(Json(TaskResponse::from(&task)))
}

pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.tasks.delete(parse_task_id(&id)?).await?;
    Ok(StatusCode::OK)
}
