//! Task management for Taskwise.
//!
//! Creates, lists, updates, and removes task records, and owns the single
//! guard that keeps task priorities inside `1..=5`. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
