//! When steps for task status transition BDD scenarios.

use super::world::{TaskTransitionWorld, run_async};
use fieldwork::task::services::ChangeTaskStatusRequest;
use rstest_bdd_macros::when;

#[when(r#"the task status is changed to "{status}""#)]
fn change_task_status(world: &mut TaskTransitionWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(
        world
            .service
            .change_status(ChangeTaskStatusRequest::new(task.uid(), status)),
    );
    if let Ok(ref updated) = result {
        world.last_created_task = Some(updated.clone());
    }
    world.last_transition_result = Some(result);
    Ok(())
}
