//! Application services for task lifecycle orchestration.

mod board;
mod card;
mod creation;
mod notice;

pub use board::{TaskBoardError, TaskBoardService};
pub use card::{AdvanceOutcome, TaskCardService};
pub use creation::{CreateTaskRequest, TaskCreationError, TaskCreationService};
pub use notice::{Notice, NoticeLevel};
