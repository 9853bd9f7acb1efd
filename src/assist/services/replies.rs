//! Parsing of free-text model replies.

use crate::assist::domain::PrioritySuggestion;
use regex::Regex;
use std::sync::LazyLock;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and always compiles"
)]
static BRACKETED_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[\s\S]*\]").expect("valid bracketed-array pattern"));

/// Returns the span from the first `[` to the last `]` that follows it.
///
/// The match is greedy across the whole reply, so prose before and after the
/// array is discarded while nested arrays stay intact.
#[must_use]
pub fn extract_bracketed_array(reply: &str) -> Option<&str> {
    BRACKETED_ARRAY.find(reply).map(|found| found.as_str())
}

/// Decodes priority suggestions from a model reply.
///
/// A reply with no bracketed span yields `Ok(None)`: the model produced
/// nothing usable. A bracketed span that does not decode as an array of
/// suggestions is an error.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when the extracted span is not a JSON array
/// of `{taskId, suggestedPriority, reason}` objects.
pub fn parse_priority_suggestions(
    reply: &str,
) -> Result<Option<Vec<PrioritySuggestion>>, serde_json::Error> {
    extract_bracketed_array(reply)
        .map(serde_json::from_str::<Vec<PrioritySuggestion>>)
        .transpose()
}
