//! Then steps for priority suggestion BDD scenarios.

use super::world::PrioritySuggestionWorld;
use rstest_bdd_macros::then;
use taskwise::assist::{domain::PrioritySuggestion, services::AssistError};

fn suggestions(world: &PrioritySuggestionWorld) -> Result<&[PrioritySuggestion], eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(suggestions)) => Ok(suggestions),
        Some(Err(err)) => Err(eyre::eyre!("suggestion request failed: {err}")),
        None => Err(eyre::eyre!("priorities were never requested")),
    }
}

#[then("{count:usize} suggestion is returned")]
fn one_suggestion_returned(world: &PrioritySuggestionWorld, count: usize) -> Result<(), eyre::Report> {
    suggestions_returned(world, count)
}

#[then("{count:usize} suggestions are returned")]
fn suggestions_returned(world: &PrioritySuggestionWorld, count: usize) -> Result<(), eyre::Report> {
    let found = suggestions(world)?.len();
    eyre::ensure!(found == count, "expected {count} suggestions, found {found}");
    Ok(())
}

#[then(r#"the suggestion for "{title}" has priority {priority:i64}"#)]
fn suggestion_has_priority(
    world: &PrioritySuggestionWorld,
    title: String,
    priority: i64,
) -> Result<(), eyre::Report> {
    let task_id = world.task_titled(&title)?.id().to_string();
    let suggestion = suggestions(world)?
        .iter()
        .find(|suggestion| suggestion.task_id == task_id)
        .ok_or_else(|| eyre::eyre!("no suggestion for {title:?}"))?;
    eyre::ensure!(
        suggestion.suggested_level() == Some(priority),
        "expected priority {priority}, found {}",
        suggestion.suggested_priority
    );
    Ok(())
}

#[then("the request fails with malformed suggestions")]
fn request_fails_with_malformed_suggestions(
    world: &PrioritySuggestionWorld,
) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("priorities were never requested"))?;
    eyre::ensure!(
        matches!(result, Err(AssistError::MalformedSuggestions(_))),
        "expected MalformedSuggestions error, got {result:?}"
    );
    Ok(())
}

#[then("the model was not called")]
fn model_not_called(world: &PrioritySuggestionWorld) -> Result<(), eyre::Report> {
    let calls = world.provider.call_count();
    eyre::ensure!(calls == 0, "expected no model calls, found {calls}");
    Ok(())
}

#[then(r#"the task "{title}" has priority {priority:u8}"#)]
fn task_has_priority(
    world: &PrioritySuggestionWorld,
    title: String,
    priority: u8,
) -> Result<(), eyre::Report> {
    let stored = world.task_titled(&title)?.priority().map(|level| level.value());
    eyre::ensure!(
        stored == Some(priority),
        "expected priority {priority}, found {stored:?}"
    );
    Ok(())
}

#[then(r#"the task "{title}" is left without a priority"#)]
fn task_has_no_priority(world: &PrioritySuggestionWorld, title: String) -> Result<(), eyre::Report> {
    let stored = world.task_titled(&title)?.priority();
    eyre::ensure!(stored.is_none(), "expected no priority, found {stored:?}");
    Ok(())
}

#[then("{count:usize} suggestion was rejected")]
fn suggestions_rejected(world: &PrioritySuggestionWorld, count: usize) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.rejected == count,
        "expected {count} rejections, found {}",
        world.rejected
    );
    Ok(())
}
