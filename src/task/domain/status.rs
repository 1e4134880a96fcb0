//! Task status lifecycle, derived progress, and the student advance
//! transition function.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been assigned but work has not started.
    #[default]
    NotStarted,
    /// Student is working on the task.
    InProgress,
    /// Student considers the task done and awaits mentor review.
    PendingReview,
    /// Mentor has approved the task. Terminal.
    Completed,
}

impl TaskStatus {
    /// All statuses in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::PendingReview,
        Self::Completed,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::PendingReview => "pending-review",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In Progress",
            Self::PendingReview => "Pending Review",
            Self::Completed => "Completed",
        }
    }

    /// Parses an externally supplied status, falling back to
    /// [`TaskStatus::NotStarted`] when the value is absent or unrecognized.
    #[must_use]
    pub fn from_external(value: Option<&str>) -> Self {
        value
            .and_then(|raw| Self::try_from(raw).ok())
            .unwrap_or_default()
    }

    /// Progress percentage derived from the status.
    ///
    /// Never stored; recomputed on every read.
    #[must_use]
    pub const fn progress(self) -> u8 {
        match self {
            Self::NotStarted => 0,
            Self::InProgress => 50,
            Self::PendingReview => 75,
            Self::Completed => 100,
        }
    }

    /// Progress percentage for a raw external status string.
    ///
    /// Unrecognized values yield `0`.
    #[must_use]
    pub fn progress_for(raw: &str) -> u8 {
        Self::from_external(Some(raw)).progress()
    }

    /// Returns `true` when a student may still attempt to advance the task.
    #[must_use]
    pub const fn can_advance(self) -> bool {
        !matches!(self, Self::Completed)
    }

    /// Returns `true` for the terminal status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Computes the student-initiated advance from this status.
    ///
    /// Students never move a task into [`TaskStatus::Completed`]; both the
    /// pending-review and completed boundaries are reported as blocked
    /// no-ops.
    #[must_use]
    pub const fn plan_advance(self) -> AdvancePlan {
        match self {
            Self::NotStarted => AdvancePlan::Transition {
                from: self,
                to: Self::InProgress,
            },
            Self::InProgress => AdvancePlan::Transition {
                from: self,
                to: Self::PendingReview,
            },
            Self::PendingReview => AdvancePlan::Blocked(AdvanceBlocked::AwaitingReview),
            Self::Completed => AdvancePlan::Blocked(AdvanceBlocked::AlreadyCompleted),
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "pending-review" => Ok(Self::PendingReview),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of planning a student-initiated advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePlan {
    /// The task may move forward.
    Transition {
        /// Current status.
        from: TaskStatus,
        /// Status the task should move to.
        to: TaskStatus,
    },
    /// The advance is a no-op.
    Blocked(AdvanceBlocked),
}

/// Reason an advance leaves the task unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvanceBlocked {
    /// The task waits for the mentor to review it.
    AwaitingReview,
    /// The mentor completed the task; it is immutable.
    AlreadyCompleted,
}

impl AdvanceBlocked {
    /// Returns the message presented to the student.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AwaitingReview => {
                "Task is pending mentor review. Waiting for mentor approval to complete."
            }
            Self::AlreadyCompleted => {
                "This task has been completed by the mentor and can no longer be changed."
            }
        }
    }
}

impl fmt::Display for AdvanceBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
