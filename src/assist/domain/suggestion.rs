//! Priority suggestions decoded from model replies.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A proposed priority for one task, as returned by the model.
///
/// Suggestions are ephemeral and never persisted directly. Neither
/// `task_id` nor `suggested_priority` is checked here: the id may not match
/// any requested task and the priority may be fractional or fall outside
/// `1..=5`. Writing a suggestion back goes through
/// [`TaskService::update_priority`](crate::task::services::TaskService::update_priority),
/// which enforces the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritySuggestion {
    /// Identifier of the task the suggestion refers to.
    pub task_id: String,
    /// Proposed priority, nominally 1 (most urgent) to 5 (least urgent).
    pub suggested_priority: Number,
    /// Short justification.
    pub reason: String,
}

impl PrioritySuggestion {
    /// Returns the suggested priority as a whole number.
    ///
    /// Integral floats such as `2.0` count as whole numbers. Returns `None`
    /// for fractional or unrepresentable values.
    #[must_use]
    pub fn suggested_level(&self) -> Option<i64> {
        // Floats render with a trailing `.0` when integral.
        self.suggested_priority.as_i64().or_else(|| {
            self.suggested_priority
                .to_string()
                .strip_suffix(".0")
                .and_then(|whole| whole.parse().ok())
        })
    }
}
