//! In-memory integration tests for student-side card operations.

use std::sync::Arc;

use super::helpers::{api, assigned_task, clock};
use mentor_tasks::task::{
    adapters::memory::InMemoryTaskApi,
    domain::{AdvanceBlocked, FileDescriptor, TaskCard, TaskStatus, UploadOutcome},
    ports::TaskApi,
    services::{AdvanceOutcome, TaskCardService},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn student_advances_to_review_and_stops(api: Arc<InMemoryTaskApi>) {
    api.insert(assigned_task("flow-1", TaskStatus::NotStarted))
        .expect("seed task");
    let service = TaskCardService::new(Arc::clone(&api));
    let task = api
        .fetch_mentee_tasks("mentee-1")
        .await
        .expect("listing succeeds")
        .into_iter()
        .next()
        .expect("seeded task is listed");
    let mut card = TaskCard::new(task);

    let first = service.advance(&mut card, |_| {}).await;
    assert!(first.is_changed());
    assert_eq!(card.progress(), 50);

    let second = service.advance(&mut card, |_| {}).await;
    assert!(second.is_changed());
    assert_eq!(card.status(), TaskStatus::PendingReview);
    assert_eq!(card.progress(), 75);

    let third = service.advance(&mut card, |_| {}).await;
    assert_eq!(
        third,
        AdvanceOutcome::Unchanged(AdvanceBlocked::AwaitingReview)
    );

    let stored = api.fetch_all_tasks().await.expect("listing succeeds");
    assert_eq!(
        stored.first().map(|task| task.status()),
        Some(TaskStatus::PendingReview)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_card_keeps_status_when_backend_rejects(api: Arc<InMemoryTaskApi>) {
    api.insert(assigned_task("flow-2", TaskStatus::InProgress))
        .expect("seed task");
    let service = TaskCardService::new(Arc::clone(&api));
    let stale = assigned_task("flow-2", TaskStatus::InProgress);
    let mut card = TaskCard::new(stale);
    api.mark_reviewed(card.task().id())
        .await
        .expect("mentor completes first");

    let outcome = service.advance(&mut card, |_| {}).await;

    assert!(matches!(outcome, AdvanceOutcome::Failed { .. }));
    assert_eq!(card.status(), TaskStatus::InProgress);
    assert!(!card.is_updating());
}

#[rstest]
fn uploads_lock_after_mentor_review(clock: DefaultClock) {
    let mut card = TaskCard::new(assigned_task("flow-3", TaskStatus::PendingReview));
    let files = vec![
        FileDescriptor::new("diagram.png", 4096, "image/png"),
        FileDescriptor::new("diagram.png", 4096, "image/png"),
    ];

    assert_eq!(card.upload_files(files, &clock), UploadOutcome::Added(2));
    let approved = card.task().clone().with_status(TaskStatus::Completed);
    card.refresh(approved);

    let late = vec![FileDescriptor::new("late.txt", 1, "text/plain")];
    assert_eq!(card.upload_files(late, &clock), UploadOutcome::ReadOnly);
    assert_eq!(card.attachments().len(), 2);
    assert_eq!(card.attachments().total_size(), 8192);
}
