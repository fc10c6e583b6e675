use async_trait::async_trait;
use sqlx::PgPool;
use std::error::Error;

use super::model::{Project, ProjectReference};

#[derive(Debug)]
pub enum ResolveError {
  NotFound(String),
  Store(String),
}

impl Error for ResolveError {}

impl std::fmt::Display for ResolveError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ResolveError::NotFound(msg) => write!(f, "Not Found: {}", msg),
      ResolveError::Store(msg) => write!(f, "Store Error: {}", msg),
    }
  }
}

impl From<sqlx::Error> for ResolveError {
  fn from(err: sqlx::Error) -> Self {
    ResolveError::Store(format!("Database error: {}", err))
  }
}

/// Read-only resource store for projects. The send path never writes.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
  async fn resolve(&self, reference: &ProjectReference) -> Result<Project, ResolveError>;
}

pub struct SqlxProjectRepository {
  pub pool: PgPool,
}

impl SqlxProjectRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepository {
  async fn resolve(&self, reference: &ProjectReference) -> Result<Project, ResolveError> {
    let project = sqlx::query_as::<_, Project>(
      r#"SELECT id, name, features, created_at FROM projects WHERE id = $1"#,
    )
    .bind(reference.id)
    .fetch_optional(&self.pool)
    .await?;

    project.ok_or_else(|| ResolveError::NotFound(format!("Project {} not found", reference.id)))
  }
}
