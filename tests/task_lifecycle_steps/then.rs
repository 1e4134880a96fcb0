//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use mentor_tasks::task::domain::{TaskStatus, UploadOutcome};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &mut TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let card = world.card_mut()?;

    if card.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            card.status().as_str()
        ));
    }
    if card.is_updating() {
        return Err(eyre::eyre!("card is still marked as updating"));
    }
    Ok(())
}

#[then("the task progress is {progress:u8}")]
fn task_progress_is(world: &mut TaskLifecycleWorld, progress: u8) -> Result<(), eyre::Report> {
    let card = world.card_mut()?;
    eyre::ensure!(
        card.progress() == progress,
        "expected progress {progress}, found {}",
        card.progress()
    );
    Ok(())
}

#[then(r#"the student is told "{message}""#)]
fn student_is_told(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let notice = world
        .last_outcome
        .as_ref()
        .and_then(|outcome| outcome.notice())
        .ok_or_else(|| eyre::eyre!("missing advance notice"))?;
    eyre::ensure!(
        notice.message() == message,
        "expected notice {message:?}, found {:?}",
        notice.message()
    );
    Ok(())
}

#[then("the upload is refused")]
fn upload_is_refused(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_upload == Some(UploadOutcome::ReadOnly),
        "expected read-only upload, found {:?}",
        world.last_upload
    );
    Ok(())
}
