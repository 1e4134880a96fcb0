//! Task aggregate root.

use super::{AdvancePlan, Attachment, TaskCategory, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// One unit of work assigned by a mentor to a student.
///
/// Progress is never stored; [`Task::progress`] derives it from the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instructions: Option<String>,
    #[serde(default)]
    resources: Option<String>,
    #[serde(default, deserialize_with = "lenient_category")]
    category: TaskCategory,
    #[serde(default, deserialize_with = "lenient_priority")]
    priority: TaskPriority,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    estimated_time: Option<String>,
    #[serde(default)]
    points: u32,
    #[serde(default, deserialize_with = "lenient_status")]
    status: TaskStatus,
    #[serde(default)]
    mentor_id: Option<String>,
    #[serde(default)]
    mentor_name: Option<String>,
    #[serde(default)]
    mentee_id: Option<String>,
    #[serde(default)]
    mentee_name: Option<String>,
    #[serde(default)]
    uploaded_files: Vec<Attachment>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a task with required fields and defaults for the rest.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            instructions: None,
            resources: None,
            category: TaskCategory::default(),
            priority: TaskPriority::default(),
            due_date: None,
            estimated_time: None,
            points: 0,
            status: TaskStatus::default(),
            mentor_id: None,
            mentor_name: None,
            mentee_id: None,
            mentee_name: None,
            uploaded_files: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the instructions.
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Sets the resources text.
    #[must_use]
    pub fn with_resources(mut self, resources: impl Into<String>) -> Self {
        self.resources = Some(resources.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the estimated time label.
    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = Some(estimated_time.into());
        self
    }

    /// Sets the reward points.
    #[must_use]
    pub const fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    /// Sets the status as reported by the system of record.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the assigning mentor.
    #[must_use]
    pub fn with_mentor(mut self, mentor_id: Option<String>, mentor_name: Option<String>) -> Self {
        self.mentor_id = mentor_id;
        self.mentor_name = mentor_name;
        self
    }

    /// Sets the assigned mentee.
    #[must_use]
    pub fn with_mentee(mut self, mentee_id: Option<String>, mentee_name: Option<String>) -> Self {
        self.mentee_id = mentee_id;
        self.mentee_name = mentee_name;
        self
    }

    /// Sets previously uploaded proof files.
    #[must_use]
    pub fn with_uploaded_files(mut self, files: impl IntoIterator<Item = Attachment>) -> Self {
        self.uploaded_files = files.into_iter().collect();
        self
    }

    /// Sets creation and latest-update timestamps.
    #[must_use]
    pub const fn with_timestamps(
        mut self,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the instructions, if any.
    #[must_use]
    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    /// Returns the resources text, if any.
    #[must_use]
    pub fn resources(&self) -> Option<&str> {
        self.resources.as_deref()
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the estimated time label, if any.
    #[must_use]
    pub fn estimated_time(&self) -> Option<&str> {
        self.estimated_time.as_deref()
    }

    /// Returns the reward points.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the progress percentage derived from the status.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.status.progress()
    }

    /// Returns `true` unless the task is completed.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.status.can_advance()
    }

    /// Returns the mentor identifier, if known.
    #[must_use]
    pub fn mentor_id(&self) -> Option<&str> {
        self.mentor_id.as_deref()
    }

    /// Returns the mentor display name, if known.
    #[must_use]
    pub fn mentor_name(&self) -> Option<&str> {
        self.mentor_name.as_deref()
    }

    /// Returns the mentee identifier, if known.
    #[must_use]
    pub fn mentee_id(&self) -> Option<&str> {
        self.mentee_id.as_deref()
    }

    /// Returns the mentee display name, if known.
    #[must_use]
    pub fn mentee_name(&self) -> Option<&str> {
        self.mentee_name.as_deref()
    }

    /// Returns previously uploaded proof files.
    #[must_use]
    pub fn uploaded_files(&self) -> &[Attachment] {
        &self.uploaded_files
    }

    /// Returns the creation timestamp, if known.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns the latest update timestamp, if known.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Applies a student-initiated advance.
    ///
    /// Returns the new status, or `None` when the advance is blocked; a
    /// blocked advance leaves the task untouched.
    pub fn advance(&mut self, clock: &impl Clock) -> Option<TaskStatus> {
        match self.status.plan_advance() {
            AdvancePlan::Transition { to, .. } => {
                self.status = to;
                self.touch(clock);
                Some(to)
            }
            AdvancePlan::Blocked(_) => None,
        }
    }

    /// Marks the task completed after mentor review.
    ///
    /// Returns `false` when the task was already completed.
    pub fn complete_by_mentor(&mut self, clock: &impl Clock) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = TaskStatus::Completed;
        self.touch(clock);
        true
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc());
    }
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskStatus, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(TaskStatus::from_external(raw.as_deref()))
}

fn lenient_category<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskCategory, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(TaskCategory::from_external(raw.as_deref()))
}

fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TaskPriority, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(TaskPriority::from_external(raw.as_deref()))
}
