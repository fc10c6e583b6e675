use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::email::types::{EmailMessage, SmtpConfig};

/// Outward delivery seam. A single attempt per call; failure semantics
/// belong to the implementation.
#[async_trait]
pub trait EmailSender: Send + Sync {
  async fn send_email(&self, message: &EmailMessage) -> Result<()>;
}

pub struct SmtpEmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpEmailService {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl EmailSender for SmtpEmailService {
  async fn send_email(&self, message: &EmailMessage) -> Result<()> {
    let email = Message::builder()
      .from(self.smtp_config.from_email.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .header(ContentType::TEXT_PLAIN)
      .body(message.body.clone())?;

    self.transporter.send(email).await?;

    Ok(())
  }
}
