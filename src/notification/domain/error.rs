//! Error types for notification domain validation.

use thiserror::Error;

/// Errors returned while constructing outgoing emails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotificationDomainError {
    /// The recipient is blank or lacks an `@`.
    #[error("invalid recipient address '{0}'")]
    InvalidRecipient(String),

    /// The subject is empty after trimming.
    #[error("email subject must not be empty")]
    EmptySubject,
}
