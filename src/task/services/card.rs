//! Service layer for the student-initiated advance operation.

use super::Notice;
use crate::task::{
    domain::{AdvanceBlocked, AdvanceStep, Task, TaskCard, TaskStatus},
    ports::TaskApi,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Outcome of one advance request on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The system of record accepted the new status.
    Changed {
        /// Status before the update.
        from: TaskStatus,
        /// Status after the update.
        to: TaskStatus,
        /// Authoritative task returned by the system of record.
        task: Task,
    },
    /// Nothing changed; the reason explains why.
    Unchanged(AdvanceBlocked),
    /// An update for this card was already outstanding.
    Busy,
    /// The remote update failed; the prior status is retained.
    Failed {
        /// Human-readable failure reason.
        message: String,
    },
}

impl AdvanceOutcome {
    /// Returns `true` when the status changed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// User-facing notice for this outcome; a busy card stays silent.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Changed { task, .. } => Some(Notice::success(format!(
                "Task status changed to {}",
                task.status().label()
            ))),
            Self::Unchanged(reason) => Some(Notice::info(reason.message())),
            Self::Busy => None,
            Self::Failed { message } => Some(Notice::error(format!(
                "Failed to update task status: {message}"
            ))),
        }
    }
}

/// Drives status advances for task cards against the system of record.
#[derive(Clone)]
pub struct TaskCardService<A>
where
    A: TaskApi,
{
    api: Arc<A>,
}

impl<A> TaskCardService<A>
where
    A: TaskApi,
{
    /// Creates a new card service.
    #[must_use]
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Advances the card's task one step.
    ///
    /// Completed and pending-review tasks are reported as unchanged without
    /// contacting the system of record. Otherwise exactly one status update
    /// is sent; on success `on_update` receives the authoritative task and
    /// the card adopts it, on failure the card keeps its prior status. The
    /// card's busy flag is cleared on every path, including when the
    /// returned future is dropped before the update resolves.
    pub async fn advance<F>(&self, card: &mut TaskCard, on_update: F) -> AdvanceOutcome
    where
        F: FnOnce(&Task) + Send,
    {
        let (task_id, from, to) = match card.begin_advance() {
            AdvanceStep::Dispatch { task_id, from, to } => (task_id, from, to),
            AdvanceStep::Blocked(reason) => {
                debug!(task_id = %card.task().id(), ?reason, "advance blocked");
                return AdvanceOutcome::Unchanged(reason);
            }
            AdvanceStep::Busy => {
                debug!(task_id = %card.task().id(), "advance ignored while busy");
                return AdvanceOutcome::Busy;
            }
        };

        let in_flight = InFlightAdvance::new(card);
        debug!(%task_id, %from, %to, "changing task status");
        let result = self.api.update_status(&task_id, to).await;

        match in_flight.finish(result) {
            Ok(updated) => {
                on_update(&updated);
                AdvanceOutcome::Changed {
                    from,
                    to: updated.status(),
                    task: updated,
                }
            }
            Err(err) => {
                warn!(%task_id, error = %err, "task status update failed");
                AdvanceOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Keeps a card busy while its status update is outstanding.
///
/// Dropping the guard without calling [`InFlightAdvance::finish`] abandons
/// the advance, so a cancelled future never leaves the card stuck busy.
struct InFlightAdvance<'a> {
    card: Option<&'a mut TaskCard>,
}

impl<'a> InFlightAdvance<'a> {
    const fn new(card: &'a mut TaskCard) -> Self {
        Self { card: Some(card) }
    }

    fn finish<E>(mut self, result: Result<Task, E>) -> Result<Task, E> {
        match self.card.take() {
            Some(card) => card.finish_advance(result).cloned(),
            None => result,
        }
    }
}

impl Drop for InFlightAdvance<'_> {
    fn drop(&mut self) {
        if let Some(card) = self.card.take() {
            debug!(task_id = %card.task().id(), "status update abandoned");
            card.abandon_advance();
        }
    }
}
