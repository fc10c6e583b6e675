//! Uniform response contract for the email API.
//!
//! Every endpoint reports its result as a tagged `Outcome` rather than an
//! ad-hoc status/body pair, so callers can switch on `status` uniformly.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde::Serialize;
use serde_json::json;

use crate::domains::project::repository::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
  pub field: String,
  pub message: String,
}

impl ValidationIssue {
  pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      field: field.into(),
      message: message.into(),
    }
  }
}

#[derive(Debug)]
pub enum Outcome {
  Ok,
  Invalid(Vec<ValidationIssue>),
  AccessDenied,
  ResolutionFailed { status_code: StatusCode, message: String },
}

impl From<ResolveError> for Outcome {
  fn from(err: ResolveError) -> Self {
    match err {
      ResolveError::NotFound(message) => Outcome::ResolutionFailed {
        status_code: StatusCode::NOT_FOUND,
        message,
      },
      ResolveError::Store(message) => Outcome::ResolutionFailed {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        message,
      },
    }
  }
}

impl IntoResponse for Outcome {
  fn into_response(self) -> Response {
    match self {
      Outcome::Ok => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
      Outcome::Invalid(issues) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": "invalid", "issues": issues })),
      )
        .into_response(),
      Outcome::AccessDenied => (
        StatusCode::FORBIDDEN,
        Json(json!({ "status": "access-denied", "message": "Access denied" })),
      )
        .into_response(),
      Outcome::ResolutionFailed { status_code, message } => (
        status_code,
        Json(json!({ "status": "error", "message": message })),
      )
        .into_response(),
    }
  }
}
