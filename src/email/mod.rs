//! Email transport collaborator.
//!
//! Delivery goes through the `EmailSender` seam; the production
//! implementation speaks SMTP via lettre. Retries, templating and
//! provider-specific behavior are owned by the transport, not by callers.

mod service;
mod types;

pub use service::{EmailSender, SmtpEmailService};
pub use types::{EmailMessage, SmtpConfig};
