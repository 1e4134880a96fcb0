//! Service layer for task listings and mentor review.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskApi, TaskApiError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The system of record failed.
    #[error(transparent)]
    Api(#[from] TaskApiError),
}

/// Result type for task board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Lists tasks and applies mentor review.
#[derive(Clone)]
pub struct TaskBoardService<A>
where
    A: TaskApi,
{
    api: Arc<A>,
}

impl<A> TaskBoardService<A>
where
    A: TaskApi,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Lists tasks assigned to a mentee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingAssignee`] for a blank mentee id
    /// or [`TaskBoardError::Api`] when the lookup fails.
    pub async fn mentee_tasks(&self, mentee_id: &str) -> TaskBoardResult<Vec<Task>> {
        let trimmed = mentee_id.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::MissingAssignee.into());
        }
        Ok(self.api.fetch_mentee_tasks(trimmed).await?)
    }

    /// Lists all tasks visible to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Api`] when the lookup fails.
    pub async fn all_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.api.fetch_all_tasks().await?)
    }

    /// Completes a task on behalf of its mentor.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Api`] when the task is unknown or the
    /// update fails.
    pub async fn mark_reviewed(&self, task_id: &TaskId) -> TaskBoardResult<Task> {
        let task = self.api.mark_reviewed(task_id).await?;
        info!(%task_id, "task marked as reviewed");
        Ok(task)
    }
}
