//! In-memory task repository behaviour.

use super::helpers::persisted_task;
use chrono::Duration;
use eyre::ensure;
use fieldwork::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskStatus},
    ports::TaskRepository,
};
use rstest::{fixture, rstest};
use tokio::task::JoinSet;

#[fixture]
fn repo() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

#[rstest]
#[tokio::test]
async fn saved_task_reads_back_equal(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let task = persisted_task("Flush irrigation lines", Duration::hours(1), TaskStatus::Due);

    repo.save(&task).await?;
    let found = repo.find_by_id(task.uid()).await?;

    ensure!(found == Some(task));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn unknown_task_is_absent(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let found = repo.find_by_id(TaskId::new()).await?;

    ensure!(found.is_none());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn save_replaces_existing_record(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let mut task = persisted_task("Restock seed trays", Duration::hours(2), TaskStatus::Created);
    repo.save(&task).await?;

    task.complete()?;
    repo.save(&task).await?;

    let all = repo.find_all().await?;
    ensure!(all.len() == 1, "expected one record, found {}", all.len());
    ensure!(all.first().map(|t| t.status()) == Some(TaskStatus::Completed));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn find_all_lists_oldest_first(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let newest = persisted_task("Newest", Duration::minutes(5), TaskStatus::Created);
    let oldest = persisted_task("Oldest", Duration::days(3), TaskStatus::Created);
    let middle = persisted_task("Middle", Duration::hours(6), TaskStatus::Created);
    for task in [&newest, &oldest, &middle] {
        repo.save(task).await?;
    }

    let titles: Vec<String> = repo
        .find_all()
        .await?
        .iter()
        .map(|task| task.title().to_owned())
        .collect();

    ensure!(titles == ["Oldest", "Middle", "Newest"]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn clones_share_storage(repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let other = repo.clone();
    let task = persisted_task("Check pump", Duration::hours(1), TaskStatus::Created);

    other.save(&task).await?;

    ensure!(repo.find_by_id(task.uid()).await?.is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_saves_of_distinct_tasks_are_all_kept(
    repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    const TASKS: usize = 200;
    let mut saves = JoinSet::new();
    for index in 0..TASKS {
        let writer = repo.clone();
        let task = persisted_task(
            &format!("Inspect bed {index}"),
            Duration::minutes(5),
            TaskStatus::Created,
        );
        saves.spawn(async move { writer.save(&task).await.map(|()| task) });
    }

    let mut saved = Vec::with_capacity(TASKS);
    while let Some(joined) = saves.join_next().await {
        saved.push(joined??);
    }

    let all = repo.find_all().await?;
    ensure!(all.len() == TASKS, "expected {TASKS} tasks, found {}", all.len());
    for task in saved {
        let found = repo.find_by_id(task.uid()).await?;
        ensure!(found.as_ref() == Some(&task), "task {} was not kept intact", task.uid());
    }
    Ok(())
}
