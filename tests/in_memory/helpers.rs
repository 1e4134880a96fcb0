//! Shared test helpers for in-memory task API integration tests.

use std::sync::Arc;

use mentor_tasks::task::{
    adapters::memory::InMemoryTaskApi,
    domain::{Task, TaskId, TaskStatus},
    ports::{AssignmentNotifier, AssignmentNotifierError, AssignmentRecipient},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Mutex;

/// Provides a fresh in-memory API for each test.
#[fixture]
pub fn api() -> Arc<InMemoryTaskApi> {
    Arc::new(InMemoryTaskApi::new().with_mentor("mentor-1", "Ada"))
}

/// Provides a clock for attachment uploads.
#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

/// Builds a task assigned to `mentee-1` with the given status.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn assigned_task(id: &str, status: TaskStatus) -> Task {
    Task::new(TaskId::new(id).expect("valid task id"), format!("Task {id}"))
        .with_status(status)
        .with_mentee(Some("mentee-1".to_owned()), Some("Sam".to_owned()))
}

/// Notifier that records every recipient it was asked to notify.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    /// Returns the addresses notified so far.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl AssignmentNotifier for RecordingNotifier {
    async fn notify_assigned(
        &self,
        recipient: &AssignmentRecipient,
        _task: &Task,
    ) -> Result<(), AssignmentNotifierError> {
        self.sent
            .lock()
            .map_err(|err| AssignmentNotifierError(err.to_string()))?
            .push(recipient.email.clone());
        Ok(())
    }
}
