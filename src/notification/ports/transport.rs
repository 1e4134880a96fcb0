//! Mail transport port.

use crate::notification::{config::SmtpSettings, domain::OutgoingEmail};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Delivers one email using resolved SMTP settings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends `email` from `settings.sender()`.
    ///
    /// # Errors
    ///
    /// Returns [`MailTransportError`] when the message cannot be built or
    /// delivery fails.
    async fn deliver(
        &self,
        settings: &SmtpSettings,
        email: &OutgoingEmail,
    ) -> Result<(), MailTransportError>;
}

/// Errors returned by mail transport adapters.
#[derive(Debug, Clone, Error)]
pub enum MailTransportError {
    /// An address could not be parsed as a mailbox.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress {
        /// Offending address.
        address: String,
        /// Parser message.
        reason: String,
    },

    /// The message could not be assembled.
    #[error("failed to build message: {0}")]
    Message(String),

    /// The SMTP exchange failed.
    #[error("smtp delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailTransportError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
