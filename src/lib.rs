//! Mentor tasks: assignment and progress tracking between mentors and
//! mentees.
//!
//! This crate provides the task lifecycle used by a mentorship platform:
//! mentors assign tasks, students advance them towards review and attach
//! proof-of-work files, and transactional email notifies users about new
//! assignments.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, SMTP)
//!
//! # Modules
//!
//! - [`task`]: Task status machine, attachment ledger, and task services
//! - [`notification`]: Email notification configuration and dispatch

pub mod notification;
pub mod task;
