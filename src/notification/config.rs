//! Layered SMTP configuration.
//!
//! Sources, highest priority last:
//! 1. Optional `mentor-tasks.toml`, `[smtp]` table
//! 2. `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS`
//! 3. `EMAIL_FROM`
//!
//! Loading never fails because a credential is missing; that check happens
//! in [`SmtpConfig::resolve`], right before a dispatch.

use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mentor-tasks.toml";

const IMPLICIT_TLS_PORT: u16 = 465;

/// Errors raised while loading or resolving SMTP configuration.
#[derive(Debug, Error)]
pub enum NotificationConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A required credential is absent.
    #[error("missing SMTP configuration: {0}")]
    MissingField(&'static str),
}

impl From<figment::Error> for NotificationConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// SMTP configuration as loaded; any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// SMTP server host.
    #[serde(default, deserialize_with = "scalar_string")]
    pub host: Option<String>,
    /// SMTP server port.
    #[serde(default)]
    pub port: Option<u16>,
    /// SMTP username.
    #[serde(default, deserialize_with = "scalar_string")]
    pub user: Option<String>,
    /// SMTP password.
    #[serde(default, deserialize_with = "scalar_string")]
    pub pass: Option<String>,
    /// Sender address; falls back to the username.
    #[serde(default, deserialize_with = "scalar_string")]
    pub from: Option<String>,
}

impl SmtpConfig {
    /// Loads configuration from [`DEFAULT_CONFIG_FILE`] and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationConfigError::Figment`] when a source is
    /// malformed.
    pub fn load() -> Result<Self, NotificationConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads `.env` into the process environment first, then behaves like
    /// [`SmtpConfig::load`].
    ///
    /// # Errors
    ///
    /// Returns [`NotificationConfigError::Figment`] when a source is
    /// malformed.
    pub fn load_with_dotenv() -> Result<Self, NotificationConfigError> {
        // A missing .env file is not an error.
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(error = %err, "no .env file loaded");
        }
        Self::load()
    }

    /// Loads configuration from the given TOML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationConfigError::Figment`] when a source is
    /// malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, NotificationConfigError> {
        Ok(Self::figment(path).extract()?)
    }

    /// Builds the provider chain; public so tests can inspect it.
    #[must_use]
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Toml::file(path.as_ref()))
            .focus("smtp")
            .merge(Env::prefixed("SMTP_"))
            .merge(Env::raw().only(&["EMAIL_FROM"]).map(|_| "from".into()))
    }

    /// Checks that every credential is present.
    ///
    /// Fields are checked in the order host, port, user, password; the
    /// first missing one is named in the error.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationConfigError::MissingField`] naming the
    /// environment variable that is absent.
    pub fn resolve(&self) -> Result<SmtpSettings, NotificationConfigError> {
        let host = required(self.host.as_deref(), "SMTP_HOST")?;
        let port = self
            .port
            .filter(|port| *port != 0)
            .ok_or(NotificationConfigError::MissingField("SMTP_PORT"))?;
        let user = required(self.user.as_deref(), "SMTP_USER")?;
        let pass = required(self.pass.as_deref(), "SMTP_PASS")?;
        let from = self
            .from
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map_or_else(|| user.clone(), str::to_owned);

        Ok(SmtpSettings {
            host,
            port,
            user,
            pass,
            from,
        })
    }
}

/// Scalar configuration value; environment providers type `123456` as an
/// integer even when the field is a password.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Unsigned(number) => number.to_string(),
        Scalar::Signed(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Bool(flag) => flag.to_string(),
    }))
}

fn required(value: Option<&str>, name: &'static str) -> Result<String, NotificationConfigError> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
        .ok_or(NotificationConfigError::MissingField(name))
}

/// Fully resolved SMTP settings.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    host: String,
    port: u16,
    user: String,
    pass: String,
    from: String,
}

impl SmtpSettings {
    /// Returns the server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the username.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password.
    #[must_use]
    pub fn pass(&self) -> &str {
        &self.pass
    }

    /// Returns the sender address.
    #[must_use]
    pub fn sender(&self) -> &str {
        &self.from
    }

    /// Returns `true` when the connection uses implicit TLS (port 465);
    /// other ports upgrade with STARTTLS.
    #[must_use]
    pub const fn implicit_tls(&self) -> bool {
        self.port == IMPLICIT_TLS_PORT
    }
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("from", &self.from)
            .finish()
    }
}
