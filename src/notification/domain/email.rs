//! Outgoing email value object.

use super::NotificationDomainError;

/// Email ready for dispatch: recipient, subject, plain-text body, and an
/// optional HTML alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    to: String,
    subject: String,
    text: String,
    html: Option<String>,
}

impl OutgoingEmail {
    /// Creates a validated plain-text email.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDomainError::InvalidRecipient`] when the
    /// recipient is blank or has no `@`, or
    /// [`NotificationDomainError::EmptySubject`] for a blank subject.
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, NotificationDomainError> {
        let raw_to = to.into();
        let recipient = raw_to.trim();
        if recipient.is_empty() || !recipient.contains('@') {
            return Err(NotificationDomainError::InvalidRecipient(raw_to));
        }
        let subject_text = subject.into();
        if subject_text.trim().is_empty() {
            return Err(NotificationDomainError::EmptySubject);
        }
        Ok(Self {
            to: recipient.to_owned(),
            subject: subject_text,
            text: text.into(),
            html: None,
        })
    }

    /// Adds an HTML alternative body.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Returns the recipient address.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the plain-text body.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the HTML body, if any.
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        self.html.as_deref()
    }
}
