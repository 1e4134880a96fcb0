//! User-facing notices produced by task operations.

use crate::task::domain::{RemovalOutcome, UploadOutcome};
use std::fmt;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    /// Informational, nothing changed.
    Info,
    /// The operation succeeded.
    Success,
    /// The operation failed and can be retried.
    Error,
}

/// Single human-readable message summarizing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    level: NoticeLevel,
    message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Notice for a file upload; empty batches stay silent.
    #[must_use]
    pub fn for_upload(outcome: UploadOutcome) -> Option<Self> {
        match outcome {
            UploadOutcome::Added(count) => {
                Some(Self::success(format!("{count} file(s) uploaded successfully")))
            }
            UploadOutcome::Empty => None,
            UploadOutcome::ReadOnly => Some(Self::info(
                "This task has been completed and approved; files can no longer change.",
            )),
        }
    }

    /// Notice for a file removal; removing an absent file stays silent.
    #[must_use]
    pub fn for_removal(outcome: RemovalOutcome) -> Option<Self> {
        match outcome {
            RemovalOutcome::Removed => Some(Self::info("File removed")),
            RemovalOutcome::Absent => None,
            RemovalOutcome::ReadOnly => Some(Self::info(
                "This task has been completed and approved; files can no longer change.",
            )),
        }
    }

    /// Returns the severity.
    #[must_use]
    pub const fn level(&self) -> NoticeLevel {
        self.level
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
