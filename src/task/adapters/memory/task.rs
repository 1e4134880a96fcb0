//! In-memory stand-in for the remote task system of record.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{NewTaskPayload, TaskApi, TaskApiError, TaskApiResult},
};

/// Thread-safe in-memory task API.
///
/// Mirrors the backend's authority rules: students cannot move a task into
/// `completed`, and completed tasks reject further status updates.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<InMemoryTaskState>>,
    mentor: Option<MentorIdentity>,
}

#[derive(Debug, Clone)]
struct MentorIdentity {
    id: String,
    name: String,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
}

impl InMemoryTaskState {
    fn position(&self, id: &TaskId) -> TaskApiResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or_else(|| TaskApiError::NotFound(id.clone()))
    }

    fn replace(&mut self, index: usize, task: Task) -> TaskApiResult<Task> {
        let slot = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| TaskApiError::NotFound(task.id().clone()))?;
        *slot = task.clone();
        Ok(task)
    }
}

impl InMemoryTaskApi {
    /// Creates an empty in-memory API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mentor recorded on tasks created through this API.
    #[must_use]
    pub fn with_mentor(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.mentor = Some(MentorIdentity {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    /// Seeds an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskApiError::Rejected`] when a task with the same
    /// identifier already exists.
    pub fn insert(&self, task: Task) -> TaskApiResult<()> {
        let mut state = self.write()?;
        if state.tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(TaskApiError::Rejected(format!(
                "duplicate task identifier: {}",
                task.id()
            )));
        }
        state.tasks.push(task);
        Ok(())
    }

    fn read(&self) -> TaskApiResult<std::sync::RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state
            .read()
            .map_err(|err| TaskApiError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskApiResult<std::sync::RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state
            .write()
            .map_err(|err| TaskApiError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskApiResult<Task> {
        let mut state = self.write()?;
        let index = state.position(id)?;
        let current = state
            .tasks
            .get(index)
            .cloned()
            .ok_or_else(|| TaskApiError::NotFound(id.clone()))?;

        if current.status().is_terminal() {
            return Err(TaskApiError::Rejected(
                "completed tasks cannot be changed".to_owned(),
            ));
        }
        if status.is_terminal() {
            return Err(TaskApiError::Rejected(
                "only the mentor can complete a task".to_owned(),
            ));
        }

        let created_at = current.created_at();
        let updated = current
            .with_status(status)
            .with_timestamps(created_at, Some(DefaultClock.utc()));
        state.replace(index, updated)
    }

    async fn create_task(&self, payload: &NewTaskPayload) -> TaskApiResult<Task> {
        let id = TaskId::new(Uuid::new_v4().to_string())
            .map_err(|err| TaskApiError::Rejected(err.to_string()))?;
        let now = DefaultClock.utc();
        let (mentor_id, mentor_name) = self
            .mentor
            .clone()
            .map_or((None, None), |mentor| (Some(mentor.id), Some(mentor.name)));

        let task = Task::new(id, payload.title.clone())
            .with_description(payload.description.clone())
            .with_instructions(payload.instructions.clone())
            .with_resources(payload.resources.clone())
            .with_category(payload.category)
            .with_priority(payload.priority)
            .with_due_date(payload.due_date)
            .with_estimated_time(payload.estimated_time.clone())
            .with_mentor(mentor_id, mentor_name)
            .with_mentee(Some(payload.mentee_id.clone()), None)
            .with_timestamps(Some(now), Some(now));

        self.write()?.tasks.push(task.clone());
        Ok(task)
    }

    async fn fetch_mentee_tasks(&self, mentee_id: &str) -> TaskApiResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.mentee_id() == Some(mentee_id))
            .cloned()
            .collect())
    }

    async fn fetch_all_tasks(&self) -> TaskApiResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    async fn mark_reviewed(&self, id: &TaskId) -> TaskApiResult<Task> {
        let mut state = self.write()?;
        let index = state.position(id)?;
        let mut task = state
            .tasks
            .get(index)
            .cloned()
            .ok_or_else(|| TaskApiError::NotFound(id.clone()))?;
        task.complete_by_mentor(&DefaultClock);
        state.replace(index, task)
    }
}
