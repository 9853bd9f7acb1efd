//! In-memory integration tests for task CRUD operations.

use std::time::Duration;

use rstest::rstest;
use taskwise::task::{
    domain::{TaskId, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskServiceError, UpdateTaskRequest},
};

use super::helpers::{TestService, seed, service};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_lifecycle_round_trip(service: TestService) -> Result<(), eyre::Report> {
    let created = service
        .create(
            CreateTaskRequest::new("  Write release notes  ")
                .with_description("Cover the API changes")
                .with_priority(3),
        )
        .await?;
    eyre::ensure!(created.title().as_str() == "Write release notes", "title not trimmed");
    eyre::ensure!(created.status() == TaskStatus::Pending, "unexpected default status");

    let updated = service
        .update(
            created.id(),
            UpdateTaskRequest::new()
                .with_status(TaskStatus::InProgress)
                .clear_description(),
        )
        .await?;
    eyre::ensure!(updated.status() == TaskStatus::InProgress, "status not applied");
    eyre::ensure!(updated.description().is_none(), "description not cleared");
    eyre::ensure!(
        updated.priority() == created.priority(),
        "untouched priority changed"
    );
    eyre::ensure!(
        updated.created_at() == created.created_at(),
        "creation time changed"
    );
    eyre::ensure!(
        updated.updated_at() >= created.updated_at(),
        "update time went backwards"
    );

    service.delete(created.id()).await?;
    let lookup = service.get(created.id()).await;
    eyre::ensure!(
        matches!(lookup, Err(TaskServiceError::NotFound(id)) if id == created.id()),
        "deleted task still retrievable"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pending_excludes_started_and_finished_work(
    service: TestService,
) -> Result<(), eyre::Report> {
    let tasks = seed(&service, &["Plan sprint", "Fix login", "Archive logs"]).await?;
    let (Some(plan), Some(fix), Some(archive)) = (tasks.first(), tasks.get(1), tasks.get(2))
    else {
        eyre::bail!("expected three seeded tasks");
    };
    service
        .update(fix.id(), UpdateTaskRequest::new().with_status(TaskStatus::InProgress))
        .await?;
    service
        .update(archive.id(), UpdateTaskRequest::new().with_status(TaskStatus::Completed))
        .await?;

    let pending = service.pending().await?;

    eyre::ensure!(pending.len() == 1, "expected one pending task, found {}", pending.len());
    eyre::ensure!(
        pending.first().map(|task| task.id()) == Some(plan.id()),
        "wrong pending task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_newest_first(service: TestService) -> Result<(), eyre::Report> {
    let mut ids = Vec::new();
    for title in ["Oldest task", "Middle task", "Newest task"] {
        ids.push(service.create(CreateTaskRequest::new(title)).await?.id());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed: Vec<TaskId> = service.list(None).await?.iter().map(|task| task.id()).collect();

    ids.reverse();
    eyre::ensure!(listed == ids, "tasks not ordered newest first");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_priority_enforces_scale(service: TestService) -> Result<(), eyre::Report> {
    let tasks = seed(&service, &["Rotate keys"]).await?;
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected a seeded task"))?;

    let rejected = service.update_priority(task.id(), 0).await;
    eyre::ensure!(
        matches!(rejected, Err(TaskServiceError::Domain(_))),
        "priority 0 accepted"
    );

    let accepted = service.update_priority(task.id(), 5).await?;
    eyre::ensure!(
        accepted.priority() == Some(TaskPriority::LOWEST),
        "priority 5 not stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_many_fails_on_first_unknown_id(service: TestService) -> Result<(), eyre::Report> {
    let tasks = seed(&service, &["Known task"]).await?;
    let known = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected a seeded task"))?;
    let missing = TaskId::new();

    let result = service.get_many(&[known.id(), missing]).await;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::NotFound(id)) if id == missing),
        "missing id not reported"
    );
    Ok(())
}
