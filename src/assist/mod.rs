//! Model-assisted task helpers.
//!
//! Builds fixed prompts from task data, sends each prompt once to a
//! text-completion provider, and turns the reply into a summary, a list of
//! priority suggestions, or a description draft. Empty inputs short-circuit
//! without calling the provider. The module follows the same layering as
//! [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - The completion provider port in [`ports`]
//! - Provider adapters in [`adapters`]
//! - Prompt rendering, reply parsing, and the assistant in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
