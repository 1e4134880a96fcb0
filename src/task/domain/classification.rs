//! Task category and priority value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a mentor assigns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Uncategorized work.
    #[default]
    General,
    /// Coding assignment.
    Coding,
    /// Reading material.
    Reading,
    /// Project work.
    Project,
    /// Research task.
    Research,
    /// Code review.
    Review,
    /// Practice exercise.
    Practice,
    /// Documentation.
    Documentation,
    /// Anything else the mentor chose explicitly.
    Other,
}

impl TaskCategory {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Coding => "coding",
            Self::Reading => "reading",
            Self::Project => "project",
            Self::Research => "research",
            Self::Review => "review",
            Self::Practice => "practice",
            Self::Documentation => "documentation",
            Self::Other => "other",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Coding => "Coding Assignment",
            Self::Reading => "Reading Material",
            Self::Project => "Project Work",
            Self::Research => "Research Task",
            Self::Review => "Code Review",
            Self::Practice => "Practice Exercise",
            Self::Documentation => "Documentation",
            Self::Other => "Other",
        }
    }

    /// Parses an external category, defaulting to
    /// [`TaskCategory::General`] for blank or unknown values.
    #[must_use]
    pub fn from_external(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "coding" => Self::Coding,
            "reading" => Self::Reading,
            "project" => Self::Project,
            "research" => Self::Research,
            "review" => Self::Review,
            "practice" => Self::Practice,
            "documentation" => Self::Documentation,
            "other" => Self::Other,
            _ => Self::General,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency assigned by the mentor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
    /// Urgent priority.
    Urgent,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
            Self::Urgent => "Urgent Priority",
        }
    }

    /// Parses an external priority, defaulting to
    /// [`TaskPriority::Medium`] for blank or unknown values.
    #[must_use]
    pub fn from_external(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Medium,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
