//! In-memory integration tests for assistant calls over stored tasks.

use rstest::rstest;
use taskwise::{
    assist::{adapters::ScriptedCompletionProvider, services::NO_PENDING_TASKS_MESSAGE},
    task::{
        domain::{TaskPriority, TaskStatus},
        services::UpdateTaskRequest,
    },
};

use super::helpers::{TestService, assistant, seed, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_covers_only_pending_tasks(service: TestService) -> Result<(), eyre::Report> {
    let tasks = seed(&service, &["Book flights", "Pay invoice"]).await?;
    let paid = tasks
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected two seeded tasks"))?;
    service
        .update(paid.id(), UpdateTaskRequest::new().with_status(TaskStatus::Completed))
        .await?;
    let provider = ScriptedCompletionProvider::always("Resumen");
    let assistant = assistant(&provider)?;

    let summary = assistant.summarize(&service.pending().await?).await?;

    eyre::ensure!(summary == "Resumen", "reply not returned verbatim");
    let prompts = provider.prompts();
    let prompt = prompts
        .first()
        .ok_or_else(|| eyre::eyre!("no prompt sent"))?;
    eyre::ensure!(prompt.contains("\"Book flights\""), "pending task missing");
    eyre::ensure!(!prompt.contains("Pay invoice"), "completed task leaked");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_of_empty_store_skips_the_model(service: TestService) -> Result<(), eyre::Report> {
    let provider = ScriptedCompletionProvider::new();
    let assistant = assistant(&provider)?;

    let summary = assistant.summarize(&service.pending().await?).await?;

    eyre::ensure!(summary == NO_PENDING_TASKS_MESSAGE, "unexpected summary");
    eyre::ensure!(provider.call_count() == 0, "model was called");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_suggestions_are_range_checked_on_write(
    service: TestService,
) -> Result<(), eyre::Report> {
    let tasks = seed(&service, &["Patch server", "Water plants"]).await?;
    let (Some(patch), Some(plants)) = (tasks.first(), tasks.get(1)) else {
        eyre::bail!("expected two seeded tasks");
    };
    let reply = format!(
        r#"[{{"taskId":"{}","suggestedPriority":1,"reason":"security"}},
            {{"taskId":"{}","suggestedPriority":7,"reason":"low impact"}}]"#,
        patch.id(),
        plants.id()
    );
    let provider = ScriptedCompletionProvider::new().with_reply(reply);
    let assistant = assistant(&provider)?;

    let suggestions = assistant.suggest_priorities(&tasks).await?;
    eyre::ensure!(suggestions.len() == 2, "expected both suggestions back");

    let mut applied = 0;
    let mut rejected = 0;
    for suggestion in &suggestions {
        let id = suggestion.task_id.parse()?;
        let Some(level) = suggestion.suggested_level() else {
            rejected += 1;
            continue;
        };
        match service.update_priority(id, level).await {
            Ok(_) => applied += 1,
            Err(_) => rejected += 1,
        }
    }

    eyre::ensure!(applied == 1 && rejected == 1, "expected one write and one rejection");
    eyre::ensure!(
        service.get(patch.id()).await?.priority() == Some(TaskPriority::HIGHEST),
        "valid suggestion not stored"
    );
    eyre::ensure!(
        service.get(plants.id()).await?.priority().is_none(),
        "out-of-range suggestion stored"
    );
    Ok(())
}
