//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mentor_tasks::task::{
    adapters::memory::InMemoryTaskApi,
    domain::{TaskCard, UploadOutcome},
    services::{AdvanceOutcome, TaskBoardService, TaskCardService},
};
use rstest::fixture;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub api: Arc<InMemoryTaskApi>,
    pub cards: TaskCardService<InMemoryTaskApi>,
    pub board: TaskBoardService<InMemoryTaskApi>,
    pub card: Option<TaskCard>,
    pub last_outcome: Option<AdvanceOutcome>,
    pub last_upload: Option<UploadOutcome>,
}

impl TaskLifecycleWorld {
    /// Creates a world backed by an empty in-memory API.
    #[must_use]
    pub fn new() -> Self {
        let api = Arc::new(InMemoryTaskApi::new().with_mentor("mentor-1", "Ada"));
        Self {
            cards: TaskCardService::new(Arc::clone(&api)),
            board: TaskBoardService::new(Arc::clone(&api)),
            api,
            card: None,
            last_outcome: None,
            last_upload: None,
        }
    }

    /// Returns the card under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been seeded yet.
    pub fn card_mut(&mut self) -> Result<&mut TaskCard, eyre::Report> {
        self.card
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing task card in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
