use async_trait::async_trait;
use std::error::Error;
use std::sync::Arc;

use crate::domains::project::{
  model::{Membership, EMAIL_FEATURE},
  repository::{ProjectRepository, ResolveError},
};
use crate::email::{EmailMessage, EmailSender};

#[derive(Debug)]
pub enum EmailApiError {
  AccessDenied,
  Resolution(ResolveError),
  Dispatch(anyhow::Error),
}

impl Error for EmailApiError {}

impl std::fmt::Display for EmailApiError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailApiError::AccessDenied => write!(f, "Access Denied"),
      EmailApiError::Resolution(err) => write!(f, "Resolution Error: {}", err),
      EmailApiError::Dispatch(err) => write!(f, "Dispatch Error: {}", err),
    }
  }
}

impl From<ResolveError> for EmailApiError {
  fn from(err: ResolveError) -> Self {
    EmailApiError::Resolution(err)
  }
}

#[async_trait]
pub trait EmailApi: Send + Sync {
  async fn send(&self, membership: &Membership, message: EmailMessage) -> Result<(), EmailApiError>;
}

pub struct EmailApiService {
  projects: Arc<dyn ProjectRepository>,
  sender: Arc<dyn EmailSender>,
}

impl EmailApiService {
  pub fn new(projects: Arc<dyn ProjectRepository>, sender: Arc<dyn EmailSender>) -> Self {
    Self { projects, sender }
  }
}

#[async_trait]
impl EmailApi for EmailApiService {
  /// Entitlement-gated dispatch: the project read always comes from the
  /// authenticated membership's reference, never from request input.
  async fn send(&self, membership: &Membership, message: EmailMessage) -> Result<(), EmailApiError> {
    let project = self.projects.resolve(&membership.project).await?;

    if !project.has_feature(EMAIL_FEATURE) {
      tracing::warn!(
        "Email feature not enabled for project {} (membership {})",
        project.id,
        membership.id
      );
      return Err(EmailApiError::AccessDenied);
    }

    self
      .sender
      .send_email(&message)
      .await
      .map_err(EmailApiError::Dispatch)?;

    tracing::info!("Email dispatched for project {} to {}", project.id, message.to);

    Ok(())
  }
}
