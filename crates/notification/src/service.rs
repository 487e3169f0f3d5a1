//! Email delivery through lettre

use std::fmt;

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Inbox that receives every contact notification
    #[serde(default)]
    pub contact_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: default_from_name(),
            from_address: default_from_address(),
            contact_address: String::new(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[redacted]")
            .field("from_name", &self.from_name)
            .field("from_address", &self.from_address)
            .field("contact_address", &self.contact_address)
            .finish()
    }
}

impl EmailConfig {
    pub fn sender(&self) -> anyhow::Result<Mailbox> {
        Ok(Mailbox::new(
            Some(self.from_name.to_owned()),
            self.from_address.parse()?,
        ))
    }

    pub fn destination(&self) -> anyhow::Result<Mailbox> {
        if self.contact_address.is_empty() {
            anyhow::bail!("email.contact_address is not configured");
        }

        Ok(Mailbox::new(None, self.contact_address.parse()?))
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    "ELICS Contact".to_string()
}

fn default_from_address() -> String {
    "noreply@elics.localhost".to_string()
}

/// A fully composed email, ready to hand to a [`Mailer`].
#[derive(Debug, Clone)]
pub struct Notification {
    pub from: Mailbox,
    pub to: Mailbox,
    pub reply_to: Mailbox,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

impl Notification {
    pub fn to_message(&self) -> Result<Message, lettre::error::Error> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(self.reply_to.clone())
            .subject(self.subject.to_owned())
            .multipart(MultiPart::alternative_plain_html(
                self.plain.to_owned(),
                self.html.to_owned(),
            ))
    }
}

/// External email capability. `Ok` means the provider accepted the message.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let transport = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { transport })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, notification: &Notification) -> anyhow::Result<()> {
        let message = notification.to_message()?;
        let transport = self.transport.clone();

        tracing::info!(subject = %notification.subject, "Sending email");

        let response = tokio::task::spawn_blocking(move || transport.send(&message)).await??;

        if !response.is_positive() {
            anyhow::bail!("smtp server did not accept the message: {}", response.code());
        }

        Ok(())
    }
}
