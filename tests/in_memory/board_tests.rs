//! In-memory integration tests for task creation, listings, and review.

use std::sync::Arc;

use super::helpers::{RecordingNotifier, api, assigned_task};
use mentor_tasks::task::{
    adapters::memory::InMemoryTaskApi,
    domain::{TaskId, TaskStatus},
    ports::TaskApiError,
    services::{CreateTaskRequest, TaskBoardError, TaskBoardService, TaskCreationService},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_listed_for_its_mentee(api: Arc<InMemoryTaskApi>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let creation = TaskCreationService::new(Arc::clone(&api), Arc::clone(&notifier));
    let board = TaskBoardService::new(Arc::clone(&api));
    let request = CreateTaskRequest::new("Write a README", "mentee-7", "2025-06-01T17:00:00Z")
        .with_description("Document the install steps")
        .with_mentee_contact("mentee7@example.com", None);

    let created = creation.create(&request).await.expect("creation succeeds");
    let listed = board
        .mentee_tasks("mentee-7")
        .await
        .expect("listing succeeds");

    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(created.mentor_id(), Some("mentor-1"));
    assert_eq!(created.progress(), 0);
    assert_eq!(notifier.sent(), vec!["mentee7@example.com".to_owned()]);
    assert!(
        board
            .mentee_tasks("someone-else")
            .await
            .expect("listing succeeds")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_contact_skips_notification(api: Arc<InMemoryTaskApi>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let creation = TaskCreationService::new(Arc::clone(&api), Arc::clone(&notifier));
    let request = CreateTaskRequest::new("Quiet task", "mentee-8", "2025-06-01");

    creation.create(&request).await.expect("creation succeeds");

    assert!(notifier.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn review_of_unknown_task_reports_not_found(api: Arc<InMemoryTaskApi>) {
    let board = TaskBoardService::new(api);
    let id = TaskId::new("missing").expect("valid id");

    let result = board.mark_reviewed(&id).await;

    assert!(matches!(
        result,
        Err(TaskBoardError::Api(TaskApiError::NotFound(ref missing))) if *missing == id
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn all_tasks_lists_every_assignment(api: Arc<InMemoryTaskApi>) {
    api.insert(assigned_task("a", TaskStatus::NotStarted))
        .expect("seed a");
    api.insert(assigned_task("b", TaskStatus::Completed))
        .expect("seed b");
    let duplicate = api.insert(assigned_task("a", TaskStatus::InProgress));
    let board = TaskBoardService::new(Arc::clone(&api));

    let all = board.all_tasks().await.expect("listing succeeds");

    assert!(matches!(duplicate, Err(TaskApiError::Rejected(_))));
    let progress: Vec<u8> = all.iter().map(|task| task.progress()).collect();
    assert_eq!(progress, [0, 100]);
}
