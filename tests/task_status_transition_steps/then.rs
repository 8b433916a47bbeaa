//! Then steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use fieldwork::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};
use rstest_bdd_macros::then;

fn expected_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status)
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;
    let stored = run_async(world.service.find_by_id(task.uid()))?
        .ok_or_else(|| eyre::eyre!("task {} is not stored", task.uid()))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected stored status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }

    Ok(())
}

#[then("the status change fails with an invalid status transition error")]
fn change_fails_with_invalid_transition(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(
            TaskDomainError::InvalidStatusTransition { .. }
        ))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }

    Ok(())
}

#[then("the status change fails with an unknown status error")]
fn change_fails_with_unknown_status(world: &TaskTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_transition_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidStatus(_))) {
        return Err(eyre::eyre!("expected InvalidStatus error, got {result:?}"));
    }

    Ok(())
}
