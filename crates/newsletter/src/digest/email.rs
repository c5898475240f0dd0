//! Email sender using Gmail SMTP.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::generator::Digest;
use crate::config::NewsletterConfig;
use crate::errors::NewsletterResult;

/// Delivers a rendered digest.
#[async_trait]
pub trait DigestSender: Send + Sync {
    /// Deliver the digest once.
    async fn send(&self, digest: &Digest) -> NewsletterResult<()>;
}

/// SMTP settings for the mail account.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// Account address; used as sender, recipient and username.
    pub address: String,
    /// Account password (Gmail app password).
    pub password: String,
}

impl From<&NewsletterConfig> for SmtpSettings {
    fn from(config: &NewsletterConfig) -> Self {
        Self {
            host: config.smtp_host.clone(),
            port: config.smtp_port,
            address: config.email_address.clone(),
            password: config.email_password.clone(),
        }
    }
}

/// Email sender for newsletter digests.
pub struct EmailSender {
    settings: SmtpSettings,
}

impl EmailSender {
    /// Create a new email sender with the given settings.
    #[must_use]
    pub const fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Build the MIME message: multipart/alternative with a single HTML part,
    /// addressed from the account to itself.
    pub fn build_message(&self, digest: &Digest) -> NewsletterResult<Message> {
        let mailbox: Mailbox = self.settings.address.parse()?;

        let email = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(digest.subject.as_str())
            .multipart(
                MultiPart::alternative().singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(digest.html.clone()),
                ),
            )?;

        Ok(email)
    }
}

#[async_trait]
impl DigestSender for EmailSender {
    async fn send(&self, digest: &Digest) -> NewsletterResult<()> {
        let email = self.build_message(digest)?;

        let creds = Credentials::new(
            self.settings.address.clone(),
            self.settings.password.clone(),
        );

        // The transport owns the connection and is dropped when this returns.
        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)?
                .port(self.settings.port)
                .credentials(creds)
                .build();

        mailer.send(email).await?;

        tracing::info!(
            to = %self.settings.address,
            subject = %digest.subject,
            "Email sent successfully"
        );

        Ok(())
    }
}
