//! Explicit view state for one task card.
//!
//! A [`TaskCard`] owns everything that used to live in presentation-local
//! state: the authoritative [`Task`], its [`AttachmentLedger`], the busy
//! flag that serializes status updates, and the expansion toggle. Every
//! transition is a plain method so it can be exercised without rendering.

use super::{
    AdvanceBlocked, AdvancePlan, AttachmentId, AttachmentLedger, FileDescriptor, Task, TaskId,
    TaskStatus,
};
use mockable::Clock;

/// First half of a student-initiated advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceStep {
    /// The status update must be sent to the system of record.
    ///
    /// The card is now busy until [`TaskCard::finish_advance`] runs.
    Dispatch {
        /// Task to update.
        task_id: TaskId,
        /// Status before the update.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
    /// The advance is a no-op for the given reason.
    Blocked(AdvanceBlocked),
    /// Another update for this card is still outstanding.
    Busy,
}

/// Result of uploading a batch of files through a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Files were appended to the ledger.
    Added(usize),
    /// The batch was empty; nothing happened.
    Empty,
    /// The task is completed and its ledger is read-only.
    ReadOnly,
}

/// Result of removing a file through a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The attachment was removed.
    Removed,
    /// No attachment with that identifier existed.
    Absent,
    /// The task is completed and its ledger is read-only.
    ReadOnly,
}

/// View state for one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    task: Task,
    ledger: AttachmentLedger,
    updating: bool,
    expanded: bool,
}

impl TaskCard {
    /// Creates a card for a task, seeding the ledger with files the task
    /// already carries.
    #[must_use]
    pub fn new(task: Task) -> Self {
        let ledger = AttachmentLedger::from_attachments(task.uploaded_files().iter().cloned());
        Self {
            task,
            ledger,
            updating: false,
            expanded: false,
        }
    }

    /// Returns the current task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.task.status()
    }

    /// Returns the progress derived from the current status.
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.task.progress()
    }

    /// Returns `true` unless the task is completed.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        self.task.can_advance()
    }

    /// Returns `true` while a status update is outstanding.
    #[must_use]
    pub const fn is_updating(&self) -> bool {
        self.updating
    }

    /// Returns `true` when the advance control should accept input.
    #[must_use]
    pub const fn advance_enabled(&self) -> bool {
        self.can_advance() && !self.updating
    }

    /// Starts a student-initiated advance.
    ///
    /// The completed gate is consulted first. Only
    /// [`AdvanceStep::Dispatch`] marks the card busy.
    pub fn begin_advance(&mut self) -> AdvanceStep {
        if !self.can_advance() {
            return AdvanceStep::Blocked(AdvanceBlocked::AlreadyCompleted);
        }
        if self.updating {
            return AdvanceStep::Busy;
        }
        match self.task.status().plan_advance() {
            AdvancePlan::Transition { from, to } => {
                self.updating = true;
                AdvanceStep::Dispatch {
                    task_id: self.task.id().clone(),
                    from,
                    to,
                }
            }
            AdvancePlan::Blocked(reason) => AdvanceStep::Blocked(reason),
        }
    }

    /// Completes an advance started with [`TaskCard::begin_advance`].
    ///
    /// Clears the busy flag on every path. On success the card adopts the
    /// task returned by the system of record; on failure the prior task is
    /// kept unchanged.
    pub fn finish_advance<E>(&mut self, result: Result<Task, E>) -> Result<&Task, E> {
        self.updating = false;
        let updated = result?;
        self.task = updated;
        Ok(&self.task)
    }

    /// Abandons an advance whose outcome will never arrive, keeping the
    /// prior task and clearing the busy flag.
    pub const fn abandon_advance(&mut self) {
        self.updating = false;
    }

    /// Replaces the task with a fresh authoritative copy, keeping the
    /// ledger.
    pub fn refresh(&mut self, task: Task) {
        self.task = task;
    }

    /// Read-only view of the attachment ledger.
    #[must_use]
    pub const fn attachments(&self) -> &AttachmentLedger {
        &self.ledger
    }

    /// Mutable ledger access, unavailable once the task is completed.
    pub const fn attachments_mut(&mut self) -> Option<&mut AttachmentLedger> {
        if self.task.status().is_terminal() {
            return None;
        }
        Some(&mut self.ledger)
    }

    /// Uploads a batch of files into the ledger.
    pub fn upload_files(
        &mut self,
        files: Vec<FileDescriptor>,
        clock: &impl Clock,
    ) -> UploadOutcome {
        let Some(ledger) = self.attachments_mut() else {
            return UploadOutcome::ReadOnly;
        };
        if files.is_empty() {
            return UploadOutcome::Empty;
        }
        UploadOutcome::Added(ledger.add_files(files, clock))
    }

    /// Removes a file from the ledger.
    pub fn remove_file(&mut self, id: &AttachmentId) -> RemovalOutcome {
        let Some(ledger) = self.attachments_mut() else {
            return RemovalOutcome::ReadOnly;
        };
        if ledger.remove_file(id) {
            RemovalOutcome::Removed
        } else {
            RemovalOutcome::Absent
        }
    }

    /// Returns `true` when proof could be submitted: at least one file is
    /// attached and no update is outstanding.
    #[must_use]
    pub fn can_submit_proof(&self) -> bool {
        !self.ledger.is_empty() && !self.updating
    }

    /// Returns `true` when the card shows its detail view.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Opens the detail view.
    pub const fn expand(&mut self) {
        self.expanded = true;
    }

    /// Closes the detail view.
    pub const fn collapse(&mut self) {
        self.expanded = false;
    }
}
