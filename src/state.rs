use std::sync::Arc;

use sqlx::PgPool;

use crate::domains::email::service::{EmailApi, EmailApiError, EmailApiService};
use crate::domains::project::{
  model::Membership,
  repository::{ProjectRepository, SqlxProjectRepository},
};
use crate::email::{EmailMessage, EmailSender, SmtpEmailService};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(
    &self,
    membership: &Membership,
    message: EmailMessage,
  ) -> impl std::future::Future<Output = Result<(), EmailApiError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub email_api: Arc<EmailApiService>,
}

impl SharedAppState {
  /// Wires the production collaborators: the Postgres-backed project store
  /// and the SMTP transport.
  pub fn new(pool: PgPool, email_service: SmtpEmailService) -> Self {
    Self::with_collaborators(Arc::new(SqlxProjectRepository::new(pool)), Arc::new(email_service))
  }

  pub fn with_collaborators(projects: Arc<dyn ProjectRepository>, sender: Arc<dyn EmailSender>) -> Self {
    let email_api = Arc::new(EmailApiService::new(projects, sender));

    Self { email_api }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, membership: &Membership, message: EmailMessage) -> Result<(), EmailApiError> {
    self.email_api.send(membership, message).await
  }
}
