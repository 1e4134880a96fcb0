//! Application services for notification dispatch.

mod assignment;
mod sender;

pub use assignment::render_task_assigned;
pub use sender::{NotificationError, NotificationResult, NotificationSender};
