//! Port contracts for notification delivery.

pub mod transport;

pub use transport::{MailTransport, MailTransportError};
