use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Feature flag gating access to the email API.
pub const EMAIL_FEATURE: &str = "email";

/// Indirect pointer to a project, resolved on demand through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectReference {
  pub id: Uuid,
}

impl ProjectReference {
  pub fn new(id: Uuid) -> Self {
    Self { id }
  }
}

/// Binding between an authenticated caller and the project they act within.
///
/// Built by the authentication middleware from token claims and handed to
/// handlers as an explicit parameter. Read-only on the request path.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Membership {
  pub id: Uuid,
  pub profile: String,
  pub project: ProjectReference,
}

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Project {
  pub id: Uuid,
  pub name: String,
  pub features: Vec<String>,
  pub created_at: Option<DateTime<Utc>>,
}

impl Project {
  pub fn has_feature(&self, name: &str) -> bool {
    self.features.iter().any(|feature| feature == name)
  }
}
