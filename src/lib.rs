//! Taskwise: task management with model-assisted helpers.
//!
//! This crate provides task persistence, an HTTP API over it, and a small
//! assistant that turns task lists into prompts for a text-completion model
//! and turns the replies back into summaries, priority suggestions, and
//! description drafts.
//!
//! # Architecture
//!
//! Taskwise follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, model APIs)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and storage
//! - [`assist`]: Prompt construction and reply parsing for task helpers
//! - [`api`]: HTTP routes exposing both over JSON
//! - [`config`]: Process configuration resolved at startup

pub mod api;
pub mod assist;
pub mod config;
pub mod task;
