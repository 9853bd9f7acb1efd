//! Route table and middleware.

use axum::{
    Router,
    http::{HeaderValue, Method, Uri, header::InvalidHeaderValue},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{ApiError, AppState, assist, tasks};

/// Builds the application router with request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/ai/summary", get(assist::summary))
        .route("/ai/priorities", post(assist::suggest_priorities))
        .route("/ai/autocomplete", post(assist::autocomplete))
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer; any origin is allowed when `origin` is `None`.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when `origin` is not a valid header value.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    origin.map_or_else(
        || Ok(CorsLayer::permissive()),
        |allowed| {
            Ok(CorsLayer::new()
                .allow_origin(HeaderValue::from_str(allowed)?)
                .allow_methods(Any)
                .allow_headers(Any))
        },
    )
}

async fn hello() -> &'static str {
    "Hello World!"
}

async fn unknown_route(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Cannot {method} {}", uri.path()))
}
