//! Step definitions for priority suggestion scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
