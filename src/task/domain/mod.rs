//! Domain model for task lifecycle management.
//!
//! The task domain models the student-facing status machine, derived
//! progress, the per-task attachment ledger, and the card state object that
//! ties them together, while keeping all infrastructure concerns outside of
//! the domain boundary.

mod attachment;
mod card;
mod classification;
mod error;
mod ids;
mod record;
mod status;
mod task;

pub use attachment::{Attachment, AttachmentId, AttachmentLedger, FileDescriptor, format_size};
pub use card::{AdvanceStep, RemovalOutcome, TaskCard, UploadOutcome};
pub use classification::{TaskCategory, TaskPriority};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use record::{PersonRecord, TaskRecord, parse_timestamp};
pub use status::{AdvanceBlocked, AdvancePlan, TaskStatus};
pub use task::Task;
