//! SMTP transport built on `lettre`.

use crate::notification::{
    config::SmtpSettings,
    domain::OutgoingEmail,
    ports::{MailTransport, MailTransportError},
};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
};
use tracing::debug;

/// Sends mail over SMTP, opening a connection per message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpMailTransport;

impl SmtpMailTransport {
    /// Creates the transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailTransportError> {
    address
        .parse::<Mailbox>()
        .map_err(|err| MailTransportError::InvalidAddress {
            address: address.to_owned(),
            reason: err.to_string(),
        })
}

/// Assembles the MIME message: plain text, or plain text with an HTML
/// alternative.
pub(crate) fn build_message(
    settings: &SmtpSettings,
    email: &OutgoingEmail,
) -> Result<Message, MailTransportError> {
    let builder = Message::builder()
        .from(parse_mailbox(settings.sender())?)
        .to(parse_mailbox(email.to())?)
        .subject(email.subject());

    let message = match email.html() {
        Some(html) => builder.multipart(MultiPart::alternative_plain_html(
            email.text().to_owned(),
            html.to_owned(),
        )),
        None => builder.singlepart(SinglePart::plain(email.text().to_owned())),
    };
    message.map_err(|err| MailTransportError::Message(err.to_string()))
}

fn build_mailer(
    settings: &SmtpSettings,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailTransportError> {
    let builder = if settings.implicit_tls() {
        AsyncSmtpTransport::<Tokio1Executor>::relay(settings.host())
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(settings.host())
    }
    .map_err(MailTransportError::delivery)?;

    Ok(builder
        .port(settings.port())
        .credentials(Credentials::new(
            settings.user().to_owned(),
            settings.pass().to_owned(),
        ))
        .build())
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn deliver(
        &self,
        settings: &SmtpSettings,
        email: &OutgoingEmail,
    ) -> Result<(), MailTransportError> {
        let message = build_message(settings, email)?;
        let mailer = build_mailer(settings)?;
        let response = mailer
            .send(message)
            .await
            .map_err(MailTransportError::delivery)?;
        debug!(code = %response.code(), "smtp server accepted message");
        Ok(())
    }
}
