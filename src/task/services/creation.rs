//! Service layer for mentor-side task creation.

use super::Notice;
use crate::task::{
    domain::{Task, TaskCategory, TaskDomainError, TaskPriority, parse_timestamp},
    ports::{AssignmentNotifier, AssignmentRecipient, NewTaskPayload, TaskApi, TaskApiError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Raw task attributes collected from the creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    instructions: String,
    category: String,
    priority: String,
    due_date: String,
    estimated_time: String,
    resources: String,
    notify_mentee: bool,
    require_submission: bool,
    mentee_id: String,
    mentee_email: Option<String>,
    mentee_name: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required form fields.
    ///
    /// `due_date` accepts an RFC 3339 timestamp or a `YYYY-MM-DD` date.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        mentee_id: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            instructions: String::new(),
            category: String::new(),
            priority: String::new(),
            due_date: due_date.into(),
            estimated_time: String::new(),
            resources: String::new(),
            notify_mentee: true,
            require_submission: false,
            mentee_id: mentee_id.into(),
            mentee_email: None,
            mentee_name: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Sets the raw category value.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the raw priority value.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the estimated time label.
    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    /// Sets the resources text.
    #[must_use]
    pub fn with_resources(mut self, resources: impl Into<String>) -> Self {
        self.resources = resources.into();
        self
    }

    /// Sets whether the mentee is notified (default `true`).
    #[must_use]
    pub const fn with_notify_mentee(mut self, notify_mentee: bool) -> Self {
        self.notify_mentee = notify_mentee;
        self
    }

    /// Sets whether proof of work is required (default `false`).
    #[must_use]
    pub const fn with_require_submission(mut self, require_submission: bool) -> Self {
        self.require_submission = require_submission;
        self
    }

    /// Sets the mentee contact used for the assignment notification.
    #[must_use]
    pub fn with_mentee_contact(
        mut self,
        email: impl Into<String>,
        name: Option<String>,
    ) -> Self {
        self.mentee_email = Some(email.into());
        self.mentee_name = name;
        self
    }

    /// Validates the form input and builds the API payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`],
    /// [`TaskDomainError::MissingAssignee`],
    /// [`TaskDomainError::MissingDueDate`], or
    /// [`TaskDomainError::InvalidDueDate`].
    pub fn to_payload(&self) -> Result<NewTaskPayload, TaskDomainError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let mentee_id = self.mentee_id.trim();
        if mentee_id.is_empty() {
            return Err(TaskDomainError::MissingAssignee);
        }
        if self.due_date.trim().is_empty() {
            return Err(TaskDomainError::MissingDueDate);
        }
        let due_date = parse_timestamp(&self.due_date)?;

        Ok(NewTaskPayload {
            title: title.to_owned(),
            description: self.description.clone(),
            instructions: self.instructions.clone(),
            category: TaskCategory::from_external(Some(&self.category)),
            priority: TaskPriority::from_external(Some(&self.priority)),
            due_date,
            estimated_time: self.estimated_time.clone(),
            resources: self.resources.clone(),
            notify_mentee: self.notify_mentee,
            require_submission: self.require_submission,
            mentee_id: mentee_id.to_owned(),
        })
    }

    fn recipient(&self) -> Option<AssignmentRecipient> {
        if !self.notify_mentee {
            return None;
        }
        let email = self.mentee_email.as_deref()?.trim();
        if email.is_empty() {
            return None;
        }
        Some(AssignmentRecipient {
            email: email.to_owned(),
            name: self.mentee_name.clone(),
        })
    }
}

/// Service-level errors for task creation.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// Form validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The system of record rejected or failed the request.
    #[error(transparent)]
    Api(#[from] TaskApiError),
}

impl TaskCreationError {
    /// User-facing notice for the failure.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Domain(
                TaskDomainError::EmptyTitle
                | TaskDomainError::MissingAssignee
                | TaskDomainError::MissingDueDate,
            ) => Notice::error("Please fill in all required fields"),
            Self::Domain(err) => Notice::error(err.to_string()),
            Self::Api(err) => Notice::error(format!("Error creating task: {err}")),
        }
    }
}

/// Result type for task creation.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Creates tasks and notifies assigned mentees.
#[derive(Clone)]
pub struct TaskCreationService<A, N>
where
    A: TaskApi,
    N: AssignmentNotifier,
{
    api: Arc<A>,
    notifier: Arc<N>,
}

impl<A, N> TaskCreationService<A, N>
where
    A: TaskApi,
    N: AssignmentNotifier,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(api: Arc<A>, notifier: Arc<N>) -> Self {
        Self { api, notifier }
    }

    /// Validates the request, creates the task, and notifies the mentee
    /// when requested.
    ///
    /// A failed notification is logged and does not fail the creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Domain`] when validation fails (no
    /// remote call is made) or [`TaskCreationError::Api`] when the system of
    /// record fails.
    pub async fn create(&self, request: &CreateTaskRequest) -> TaskCreationResult<Task> {
        let payload = request.to_payload()?;
        let task = self.api.create_task(&payload).await?;
        info!(task_id = %task.id(), mentee_id = %payload.mentee_id, "task created");

        if let Some(recipient) = request.recipient() {
            if let Err(err) = self.notifier.notify_assigned(&recipient, &task).await {
                warn!(task_id = %task.id(), error = %err, "assignment notification failed");
            }
        }
        Ok(task)
    }
}
