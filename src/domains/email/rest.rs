use axum::{
  body::Bytes,
  extract::State,
  http::{header, HeaderMap},
  routing::{post, Router},
  Extension,
};

use super::model::validate_send_request;
use super::service::{EmailApi, EmailApiError};
use crate::domains::project::model::Membership;
use crate::outcome::Outcome;
use crate::state::{AppState, SharedAppState};
use crate::utils::error::AppError;

pub fn email_routes() -> Router<SharedAppState> {
  Router::new().route("/send", post(send_email_handler))
}

/// `POST /email/v1/send`
///
/// Validation runs first and aggregates every violated rule; only a fully
/// valid request reaches the entitlement check, and only an entitled
/// project reaches the sender. The membership comes in as an explicit
/// extension set by the authentication layer.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Extension(membership): Extension<Membership>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Outcome, AppError> {
  let content_type = headers.get(header::CONTENT_TYPE).and_then(|value| value.to_str().ok());

  let request = match validate_send_request(content_type, &body) {
    Ok(request) => request,
    Err(issues) => return Ok(Outcome::Invalid(issues)),
  };

  match state.send_email(&membership, request.into_message()).await {
    Ok(()) => Ok(Outcome::Ok),
    Err(EmailApiError::AccessDenied) => Ok(Outcome::AccessDenied),
    Err(EmailApiError::Resolution(err)) => Ok(Outcome::from(err)),
    Err(EmailApiError::Dispatch(err)) => {
      tracing::error!("Email dispatch failed: {:?}", err);
      Err(AppError::internal_server_error("Email dispatch failed"))
    }
  }
}
