//! Given steps for priority suggestion BDD scenarios.

use super::world::{PrioritySuggestionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use taskwise::task::services::CreateTaskRequest;

#[given(r#"a pending task titled "{title}""#)]
fn pending_task_titled(
    world: &mut PrioritySuggestionWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(title)))
        .wrap_err("create task for priority scenario")?;
    world.tasks.push(created);
    Ok(())
}

#[given(r#"the model suggests priority {priority:i64} for "{title}" because "{reason}""#)]
fn model_suggests_priority(
    world: &mut PrioritySuggestionWorld,
    priority: i64,
    title: String,
    reason: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_titled(&title)?.id();
    world.scripted_suggestions.push(json!({
        "taskId": task_id.to_string(),
        "suggestedPriority": priority,
        "reason": reason,
    }));
    Ok(())
}

#[given(r#"the model replies "{reply}""#)]
fn model_replies(world: &mut PrioritySuggestionWorld, reply: String) {
    world.raw_reply = Some(reply);
}
