//! Port for the remote task system of record.

use crate::task::domain::{Task, TaskCategory, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task API operations.
pub type TaskApiResult<T> = Result<T, TaskApiError>;

/// Validated payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskPayload {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Step-by-step instructions.
    pub instructions: String,
    /// Category.
    pub category: TaskCategory,
    /// Priority.
    pub priority: TaskPriority,
    /// Due date, serialized as ISO-8601.
    pub due_date: DateTime<Utc>,
    /// Estimated time label.
    pub estimated_time: String,
    /// Resource links, one per line.
    pub resources: String,
    /// Whether the mentee should be notified.
    pub notify_mentee: bool,
    /// Whether proof of work must be submitted.
    pub require_submission: bool,
    /// Assigned mentee identifier.
    pub mentee_id: String,
}

/// Remote task system of record.
///
/// Every call is one remote round trip; implementations own transport and
/// timeout policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Updates the status of a task and returns the authoritative task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::NotFound`] for unknown tasks,
    /// [`TaskApiError::Rejected`] when the backend refuses the change, or
    /// [`TaskApiError::Transport`] on communication failure.
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskApiResult<Task>;

    /// Creates a task and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Rejected`] or [`TaskApiError::Transport`].
    async fn create_task(&self, payload: &NewTaskPayload) -> TaskApiResult<Task>;

    /// Lists tasks assigned to a mentee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] on communication failure.
    async fn fetch_mentee_tasks(&self, mentee_id: &str) -> TaskApiResult<Vec<Task>>;

    /// Lists all tasks visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Transport`] on communication failure.
    async fn fetch_all_tasks(&self) -> TaskApiResult<Vec<Task>>;

    /// Marks a task reviewed by its mentor, completing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::NotFound`] for unknown tasks or
    /// [`TaskApiError::Transport`] on communication failure.
    async fn mark_reviewed(&self, id: &TaskId) -> TaskApiResult<Task>;
}

/// Errors returned by task API implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskApiError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The backend refused the request.
    #[error("{0}")]
    Rejected(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskApiError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
