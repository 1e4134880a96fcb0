//! Port for telling a mentee about a newly assigned task.

use crate::task::domain::Task;
use async_trait::async_trait;
use thiserror::Error;

/// Delivery target for an assignment notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecipient {
    /// Mentee email address.
    pub email: String,
    /// Mentee display name, if known.
    pub name: Option<String>,
}

/// Sends assignment notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentNotifier: Send + Sync {
    /// Notifies `recipient` that `task` was assigned to them.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentNotifierError`] when the notification could not
    /// be delivered.
    async fn notify_assigned(
        &self,
        recipient: &AssignmentRecipient,
        task: &Task,
    ) -> Result<(), AssignmentNotifierError>;
}

/// Error returned when an assignment notification fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("assignment notification failed: {0}")]
pub struct AssignmentNotifierError(pub String);
