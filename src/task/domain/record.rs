//! Lenient wire representation of tasks returned by backends.
//!
//! Backends disagree on field names (`_id` versus `id`, nested `mentor`
//! objects versus flat `mentorName`) and may omit or misspell enumerated
//! values. [`TaskRecord`] accepts all of them and [`TaskRecord::into_task`]
//! normalizes to a [`Task`].

use super::{Attachment, Task, TaskCategory, TaskDomainError, TaskId, TaskPriority, TaskStatus};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const FALLBACK_MENTOR_NAME: &str = "Mentor";

/// Nested user reference embedded in backend task payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// User identifier.
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Task payload as delivered by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Document-store identifier.
    #[serde(default, rename = "_id")]
    pub document_id: Option<String>,
    /// Relational identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Task title.
    #[serde(default)]
    pub title: Option<String>,
    /// Task description.
    #[serde(default)]
    pub description: Option<String>,
    /// Step-by-step instructions.
    #[serde(default)]
    pub instructions: Option<String>,
    /// Resource links, one per line.
    #[serde(default)]
    pub resources: Option<String>,
    /// Raw category value.
    #[serde(default)]
    pub category: Option<String>,
    /// Raw priority value.
    #[serde(default)]
    pub priority: Option<String>,
    /// Raw status value.
    #[serde(default)]
    pub status: Option<String>,
    /// Raw due date value.
    #[serde(default)]
    pub due_date: Option<String>,
    /// Estimated time label.
    #[serde(default)]
    pub estimated_time: Option<String>,
    /// Reward points.
    #[serde(default)]
    pub points: Option<u32>,
    /// Flat mentor identifier.
    #[serde(default)]
    pub mentor_id: Option<String>,
    /// Flat mentor name.
    #[serde(default)]
    pub mentor_name: Option<String>,
    /// Nested mentor reference.
    #[serde(default)]
    pub mentor: Option<PersonRecord>,
    /// Flat mentee identifier.
    #[serde(default)]
    pub mentee_id: Option<String>,
    /// Flat mentee name.
    #[serde(default)]
    pub mentee_name: Option<String>,
    /// Nested mentee reference.
    #[serde(default)]
    pub mentee: Option<PersonRecord>,
    /// Previously uploaded proof files.
    #[serde(default)]
    pub uploaded_files: Vec<Attachment>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Latest update timestamp.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TaskRecord {
    /// Normalizes the record into a [`Task`].
    ///
    /// Unknown enumerated values fall back to their defaults and
    /// unparseable dates are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when neither `_id` nor `id`
    /// carries a value.
    pub fn into_task(self) -> Result<Task, TaskDomainError> {
        let raw_id = non_blank(self.document_id)
            .or_else(|| non_blank(self.id))
            .ok_or(TaskDomainError::EmptyTaskId)?;
        let id = TaskId::new(raw_id)?;

        let (nested_mentor_id, nested_mentor_name) = split_person(self.mentor);
        let (nested_mentee_id, nested_mentee_name) = split_person(self.mentee);

        let mentor_name = nested_mentor_name
            .or_else(|| non_blank(self.mentor_name))
            .unwrap_or_else(|| FALLBACK_MENTOR_NAME.to_owned());

        let mut task = Task::new(id, self.title.unwrap_or_default())
            .with_category(TaskCategory::from_external(self.category.as_deref()))
            .with_priority(TaskPriority::from_external(self.priority.as_deref()))
            .with_status(TaskStatus::from_external(self.status.as_deref()))
            .with_points(self.points.unwrap_or_default())
            .with_mentor(
                non_blank(self.mentor_id).or(nested_mentor_id),
                Some(mentor_name),
            )
            .with_mentee(
                non_blank(self.mentee_id).or(nested_mentee_id),
                nested_mentee_name.or_else(|| non_blank(self.mentee_name)),
            )
            .with_uploaded_files(self.uploaded_files)
            .with_timestamps(
                self.created_at.as_deref().and_then(|raw| parse_timestamp(raw).ok()),
                self.updated_at.as_deref().and_then(|raw| parse_timestamp(raw).ok()),
            );

        if let Some(description) = non_blank(self.description) {
            task = task.with_description(description);
        }
        if let Some(instructions) = non_blank(self.instructions) {
            task = task.with_instructions(instructions);
        }
        if let Some(resources) = non_blank(self.resources) {
            task = task.with_resources(resources);
        }
        if let Some(estimated_time) = non_blank(self.estimated_time) {
            task = task.with_estimated_time(estimated_time);
        }
        if let Some(due_date) = self
            .due_date
            .as_deref()
            .and_then(|raw| parse_timestamp(raw).ok())
        {
            task = task.with_due_date(due_date);
        }

        Ok(task)
    }
}

/// Parses a timestamp in any of the shapes backends and forms produce.
///
/// Accepts RFC 3339 (`2025-03-01T12:00:00Z`), zone-less date-times
/// (`2025-03-01T12:00:00`, interpreted as UTC), and plain dates
/// (`2025-03-01`, interpreted as midnight UTC).
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when no format matches.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TaskDomainError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(parsed.and_utc());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| TaskDomainError::InvalidDueDate(raw.to_owned()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn split_person(person: Option<PersonRecord>) -> (Option<String>, Option<String>) {
    person.map_or((None, None), |record| {
        (non_blank(record.id), non_blank(record.name))
    })
}
