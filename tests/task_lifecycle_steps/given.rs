//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use eyre::WrapErr;
use mentor_tasks::task::domain::{Task, TaskCard, TaskId, TaskStatus};
use rstest_bdd_macros::given;

#[given(r#"a "{status}" task titled "{title}""#)]
fn seeded_task(
    world: &mut TaskLifecycleWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let initial = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let task = Task::new(TaskId::new("scenario-task")?, title)
        .with_status(initial)
        .with_mentee(Some("mentee-1".to_owned()), Some("Sam".to_owned()));
    world
        .api
        .insert(task.clone())
        .wrap_err("seed task for lifecycle scenario")?;
    world.card = Some(TaskCard::new(task));
    Ok(())
}
