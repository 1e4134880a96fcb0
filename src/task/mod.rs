//! Task lifecycle management.
//!
//! A task is assigned by a mentor to a student and moves through a fixed
//! status lifecycle. Students may only advance a task up to
//! `pending-review`; completion is a mentor-side action. Each task view owns
//! an attachment ledger of uploaded proof files. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
