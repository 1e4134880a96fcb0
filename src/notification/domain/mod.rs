//! Domain model for outgoing notifications.

mod email;
mod error;

pub use email::OutgoingEmail;
pub use error::NotificationDomainError;
