use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use chrono::{Duration, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

use crate::{
  app::create_app,
  domains::project::{
    model::{Membership, Project, ProjectReference},
    repository::{ProjectRepository, ResolveError},
  },
  email::{EmailMessage, EmailSender},
  state::SharedAppState,
  utils::jwt::{encode_jwt, Claims},
};

pub fn app_with_collaborators(projects: Arc<dyn ProjectRepository>, sender: Arc<dyn EmailSender>) -> Router {
  create_app(SharedAppState::with_collaborators(projects, sender))
}

pub fn project_with_features(features: &[&str]) -> Project {
  Project {
    id: Uuid::new_v4(),
    name: "Test Project".to_string(),
    features: features.iter().map(|f| f.to_string()).collect(),
    created_at: None,
  }
}

pub fn membership_for(project: &Project) -> Membership {
  Membership {
    id: Uuid::new_v4(),
    profile: "tester@example.com".to_string(),
    project: ProjectReference::new(project.id),
  }
}

/// Mints a bearer token for the membership. Sets JWT_SECRET, so callers
/// must run serially.
pub fn auth_token(membership: &Membership) -> String {
  std::env::set_var("JWT_SECRET", "test-secret");

  let claims = Claims {
    sub: membership.profile.clone(),
    exp: (Utc::now() + Duration::hours(1)).timestamp() as usize,
    membership_id: membership.id,
    project_id: membership.project.id,
  };

  encode_jwt(claims).expect("encode test token")
}

#[derive(Default)]
pub struct InMemoryProjectRepository {
  projects: HashMap<Uuid, Project>,
  fail: bool,
}

impl InMemoryProjectRepository {
  pub fn with_projects(projects: Vec<Project>) -> Self {
    Self {
      projects: projects.into_iter().map(|p| (p.id, p)).collect(),
      fail: false,
    }
  }

  pub fn failing() -> Self {
    Self {
      projects: HashMap::new(),
      fail: true,
    }
  }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
  async fn resolve(&self, reference: &ProjectReference) -> Result<Project, ResolveError> {
    if self.fail {
      return Err(ResolveError::Store("Database error: connection refused".to_string()));
    }

    self
      .projects
      .get(&reference.id)
      .cloned()
      .ok_or_else(|| ResolveError::NotFound(format!("Project {} not found", reference.id)))
  }
}

#[derive(Default)]
pub struct RecordingEmailSender {
  sent: Mutex<Vec<EmailMessage>>,
  fail: bool,
}

impl RecordingEmailSender {
  pub fn failing() -> Self {
    Self {
      sent: Mutex::new(Vec::new()),
      fail: true,
    }
  }

  pub fn sent(&self) -> Vec<EmailMessage> {
    self.sent.lock().expect("sender lock").clone()
  }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
  async fn send_email(&self, message: &EmailMessage) -> anyhow::Result<()> {
    if self.fail {
      anyhow::bail!("smtp connection refused");
    }

    self.sent.lock().expect("sender lock").push(message.clone());
    Ok(())
  }
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, token: Option<&str>, body: &T) -> (StatusCode, Bytes) {
  post_raw(
    app,
    uri,
    token,
    Some("application/json"),
    serde_json::to_vec(body).expect("serialize request body"),
  )
  .await
}

pub async fn post_raw(
  app: Router,
  uri: &str,
  token: Option<&str>,
  content_type: Option<&str>,
  body: Vec<u8>,
) -> (StatusCode, Bytes) {
  let mut builder = Request::builder().method("POST").uri(uri);

  if let Some(content_type) = content_type {
    builder = builder.header("content-type", content_type);
  }
  if let Some(token) = token {
    builder = builder.header("authorization", format!("Bearer {}", token));
  }

  let request = builder.body(Body::from(body)).expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
