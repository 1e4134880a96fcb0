//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// An attachment identifier is empty after trimming.
    #[error("attachment identifier must not be empty")]
    EmptyAttachmentId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// No mentee was selected as assignee.
    #[error("task must be assigned to a mentee")]
    MissingAssignee,

    /// No due date was supplied.
    #[error("task due date is required")]
    MissingDueDate,

    /// The due date could not be parsed.
    #[error("invalid due date '{0}', expected RFC 3339 timestamp or YYYY-MM-DD")]
    InvalidDueDate(String),
}

/// Error returned while strictly parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
