//! Email dispatch with fail-fast configuration checks.

use crate::notification::{
    config::{NotificationConfigError, SmtpConfig},
    domain::{NotificationDomainError, OutgoingEmail},
    ports::{MailTransport, MailTransportError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for notification dispatch.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// SMTP configuration is incomplete; no delivery was attempted.
    #[error(transparent)]
    Config(#[from] NotificationConfigError),
    /// The email itself is invalid.
    #[error(transparent)]
    Domain(#[from] NotificationDomainError),
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] MailTransportError),
}

/// Result type for notification dispatch.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Sends transactional email.
pub struct NotificationSender<T>
where
    T: MailTransport,
{
    config: SmtpConfig,
    transport: Arc<T>,
}

impl<T> NotificationSender<T>
where
    T: MailTransport,
{
    /// Creates a sender over the given configuration and transport.
    #[must_use]
    pub const fn new(config: SmtpConfig, transport: Arc<T>) -> Self {
        Self { config, transport }
    }

    /// Returns the configuration the sender resolves on each dispatch.
    #[must_use]
    pub const fn config(&self) -> &SmtpConfig {
        &self.config
    }

    /// Sends one email.
    ///
    /// Credentials are resolved first; when any is missing the call fails
    /// with [`NotificationError::Config`] and the transport is not used.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Config`] for incomplete configuration or
    /// [`NotificationError::Transport`] when delivery fails.
    pub async fn send(&self, email: &OutgoingEmail) -> NotificationResult<()> {
        let settings = self.config.resolve().inspect_err(|err| {
            warn!(error = %err, "email dispatch refused: incomplete configuration");
        })?;
        info!(to = %email.to(), subject = %email.subject(), "dispatching email");
        self.transport.deliver(&settings, email).await?;
        Ok(())
    }

    /// Validates and sends an email built from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Domain`] for an invalid recipient or
    /// subject, otherwise as [`NotificationSender::send`].
    pub async fn send_email(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        html: Option<&str>,
    ) -> NotificationResult<()> {
        let mut email = OutgoingEmail::new(to, subject, text)?;
        if let Some(body) = html {
            email = email.with_html(body);
        }
        self.send(&email).await
    }
}
