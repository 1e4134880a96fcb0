//! In-memory adapters for task lifecycle tests and local development.

mod task;

pub use task::InMemoryTaskApi;
