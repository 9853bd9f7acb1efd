//! In-memory integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `task_crud_tests`: create, list, update, and delete through the service
//! - `assist_flow_tests`: assistant calls over stored tasks

mod in_memory {
    pub mod helpers;

    mod assist_flow_tests;
    mod task_crud_tests;
}
