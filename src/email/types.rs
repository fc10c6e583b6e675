use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl SmtpConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    use anyhow::Context;
    use std::env;

    Ok(SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "587".to_string())
        .parse()
        .unwrap_or(587),
      username: env::var("SMTP_USERNAME").context("SMTP_USERNAME environment variable must be set")?,
      password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD environment variable must be set")?,
      from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL environment variable must be set")?,
    })
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl EmailMessage {
  pub fn new(to: String, subject: String, body: String) -> Self {
    EmailMessage { to, subject, body }
  }
}
