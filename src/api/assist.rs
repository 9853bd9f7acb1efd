//! Assistant handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use super::{
    ApiError, AppState,
    dto::{AutoCompleteBody, AutoCompleteResponse, SuggestPrioritiesBody, SummaryResponse},
};
use crate::assist::domain::PrioritySuggestion;

/// Summarises the pending tasks only.
pub(super) async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let pending = state.tasks.pending().await?;
    let summary = state.assistant.summarize(&pending).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// Every id must resolve before the model is consulted.
pub(super) async fn suggest_priorities(
    State(state): State<AppState>,
    body: Result<Json<SuggestPrioritiesBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<PrioritySuggestion>>), ApiError> {
    let Json(body) = body?;
    let ids = body.task_ids()?;
    let tasks = state.tasks.get_many(&ids).await?;
    let suggestions = state.assistant.suggest_priorities(&tasks).await?;
    Ok((StatusCode::CREATED, Json(suggestions)))
}

pub(super) async fn autocomplete(
    State(state): State<AppState>,
    body: Result<Json<AutoCompleteBody>, JsonRejection>,
) -> Result<(StatusCode, Json<AutoCompleteResponse>), ApiError> {
    let Json(body) = body?;
    let description = state.assistant.autocomplete_description(body.title()?).await?;
    Ok((StatusCode::CREATED, Json(AutoCompleteResponse { description })))
}
