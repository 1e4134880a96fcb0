//! Transactional email notifications.
//!
//! Emails are dispatched through a [`ports::MailTransport`] using SMTP
//! credentials resolved from [`config::SmtpConfig`]. Missing credentials are
//! reported as configuration errors before any network activity. The module
//! follows the same hexagonal split as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Configuration loading in [`config`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
