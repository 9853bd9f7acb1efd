//! When steps for priority suggestion BDD scenarios.

use super::world::{PrioritySuggestionWorld, run_async};
use rstest_bdd_macros::when;

#[when("priorities are requested for every task")]
fn request_priorities(world: &mut PrioritySuggestionWorld) -> Result<(), eyre::Report> {
    let reply = match world.raw_reply.take() {
        Some(raw) => raw,
        None => format!(
            "Aquí tienes las prioridades: {}",
            serde_json::to_string(&world.scripted_suggestions)?
        ),
    };
    world.provider.push_reply(reply);

    world.last_result = Some(run_async(world.assistant.suggest_priorities(&world.tasks)));
    Ok(())
}

#[when("the suggestions are applied")]
fn apply_suggestions(world: &mut PrioritySuggestionWorld) -> Result<(), eyre::Report> {
    let suggestions = match world.last_result.as_ref() {
        Some(Ok(suggestions)) => suggestions.clone(),
        other => eyre::bail!("no successful suggestion result to apply: {other:?}"),
    };

    for suggestion in suggestions {
        let task_id = suggestion.task_id.parse()?;
        let Some(level) = suggestion.suggested_level() else {
            world.rejected += 1;
            continue;
        };
        match run_async(world.service.update_priority(task_id, level)) {
            Ok(updated) => {
                if let Some(slot) = world.tasks.iter_mut().find(|task| task.id() == task_id) {
                    *slot = updated;
                }
            }
            Err(_) => world.rejected += 1,
        }
    }
    Ok(())
}
