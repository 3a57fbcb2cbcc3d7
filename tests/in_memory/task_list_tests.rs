//! In-memory integration tests for the task list view-model.

use super::helpers::{Backend, backend, credentials, deadline};
use rstest::rstest;
use taskdeck::task::{
    domain::Priority,
    services::{AddTaskRequest, TaskListViewModel},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn derived_view_orders_by_priority_then_deadline(
    backend: Backend,
) -> Result<(), eyre::Report> {
    let session = backend.sessions.sign_up(&credentials("ada@example.com")).await?;
    let mut tasks = TaskListViewModel::new(backend.store.clone(), session);
    tasks.subscribe().await?;
    tasks.next_snapshot().await;

    for (title, due, priority) in [
        ("Buy milk", "2025-01-01", Priority::High),
        ("Pay rent", "2025-01-05", Priority::High),
        ("Call mom", "2024-12-20", Priority::Low),
    ] {
        tasks
            .add(AddTaskRequest::new(title, deadline(due)?).with_priority(priority))
            .await?;
        tasks.next_snapshot().await;
    }

    let view = tasks.derived_view("");
    let titles: Vec<&str> = view.incomplete().iter().map(|task| task.title()).collect();
    eyre::ensure!(
        titles == ["Buy milk", "Pay rent", "Call mom"],
        "unexpected order: {titles:?}"
    );
    eyre::ensure!(view.completed().is_empty(), "nothing should be completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_users_share_a_store_without_seeing_each_other(
    backend: Backend,
) -> Result<(), eyre::Report> {
    let ada = backend.sessions.sign_up(&credentials("ada@example.com")).await?;
    let bob = backend.sessions.sign_up(&credentials("bob@example.com")).await?;
    let mut ada_tasks = TaskListViewModel::new(backend.store.clone(), ada);
    let mut bob_tasks = TaskListViewModel::new(backend.store.clone(), bob);
    ada_tasks.subscribe().await?;
    bob_tasks.subscribe().await?;
    ada_tasks.next_snapshot().await;
    bob_tasks.next_snapshot().await;

    ada_tasks
        .add(AddTaskRequest::new("Ada's errand", deadline("2025-01-01")?))
        .await?;
    ada_tasks.next_snapshot().await;

    eyre::ensure!(ada_tasks.tasks().len() == 1, "ada should see her task");
    eyre::ensure!(
        !bob_tasks.apply_latest_snapshot(),
        "bob's query should not be woken by ada's write"
    );
    eyre::ensure!(bob_tasks.tasks().is_empty(), "bob should see nothing");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_snapshots_collapse_to_the_latest(backend: Backend) -> Result<(), eyre::Report> {
    let session = backend.sessions.sign_up(&credentials("ada@example.com")).await?;
    let writer = TaskListViewModel::new(backend.store.clone(), session.clone());
    let mut reader = TaskListViewModel::new(backend.store.clone(), session);
    reader.subscribe().await?;

    let first = writer
        .add(AddTaskRequest::new("first", deadline("2025-01-01")?))
        .await?
        .ok_or_else(|| eyre::eyre!("first task should be created"))?;
    writer
        .add(AddTaskRequest::new("second", deadline("2025-01-02")?))
        .await?;
    writer.toggle_complete(&first, false).await?;

    eyre::ensure!(reader.apply_latest_snapshot(), "a snapshot should be pending");
    eyre::ensure!(
        !reader.apply_latest_snapshot(),
        "older snapshots should not be queued behind the latest"
    );
    let view = reader.derived_view("");
    eyre::ensure!(view.completed().len() == 1, "first task should be completed");
    eyre::ensure!(view.incomplete().len() == 1, "second task should be open");
    Ok(())
}
