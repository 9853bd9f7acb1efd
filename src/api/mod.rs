//! HTTP surface for tasks and the task assistant.
//!
//! Handlers stay thin: they decode the request, call the task service or the
//! assistant, and map service errors onto [`ApiError`] responses. Every error
//! body has the shape `{"statusCode", "message", "error"}`.

mod assist;
pub mod dto;
pub mod error;
mod router;
mod shutdown;
mod state;
mod tasks;

pub use error::ApiError;
pub use router::{build_router, cors_layer};
pub use shutdown::wait_for_shutdown;
pub use state::{AppState, SharedAssistant, SharedTaskService};
