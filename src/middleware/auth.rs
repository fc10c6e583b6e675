use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::domains::project::model::{Membership, ProjectReference};
use crate::utils::error::AppError;
use crate::utils::jwt::decode_jwt;

/// Authentication gate for the email routes. Resolves the caller's
/// membership from the bearer token and hands it to handlers as a request
/// extension; a missing or invalid token never reaches a handler.
pub async fn require_membership(mut request: Request, next: Next) -> Result<Response, AppError> {
  let membership = authenticate(request.headers())?;

  request.extensions_mut().insert(membership);

  Ok(next.run(request).await)
}

pub fn authenticate(headers: &HeaderMap) -> Result<Membership, AppError> {
  let auth_header = headers
    .get(axum::http::header::AUTHORIZATION)
    .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?
    .to_str()
    .map_err(|_| AppError::unauthorized("Invalid authorization header"))?;

  let token = auth_header
    .strip_prefix("Bearer ")
    .ok_or_else(|| AppError::unauthorized("Invalid authorization format"))?;

  let claims = decode_jwt(token).map_err(|_| AppError::unauthorized("Invalid token"))?;

  Ok(Membership {
    id: claims.membership_id,
    profile: claims.sub,
    project: ProjectReference::new(claims.project_id),
  })
}
