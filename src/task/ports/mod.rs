//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod task_api;

pub use notifier::{AssignmentNotifier, AssignmentNotifierError, AssignmentRecipient};
pub use task_api::{NewTaskPayload, TaskApi, TaskApiError, TaskApiResult};
