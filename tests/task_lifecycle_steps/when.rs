//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use mentor_tasks::task::domain::FileDescriptor;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when("the student advances the task")]
fn student_advances(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let card = world
        .card
        .as_mut()
        .ok_or_else(|| eyre::eyre!("missing task card in scenario world"))?;
    let outcome = run_async(world.cards.advance(card, |_| {}));
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the mentor marks the task as reviewed")]
fn mentor_reviews(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.card_mut()?.task().id().clone();
    let reviewed =
        run_async(world.board.mark_reviewed(&id)).wrap_err("mark task as reviewed")?;
    world.card_mut()?.refresh(reviewed);
    Ok(())
}

#[when(r#"the student uploads "{name}""#)]
fn student_uploads(world: &mut TaskLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let card = world.card_mut()?;
    let outcome = card.upload_files(
        vec![FileDescriptor::new(name, 512, "application/pdf")],
        &DefaultClock,
    );
    world.last_upload = Some(outcome);
    Ok(())
}
