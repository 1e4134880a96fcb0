//! Adapter implementations for notification ports.

pub mod smtp;

pub use smtp::SmtpMailTransport;
