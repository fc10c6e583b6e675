use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub exp: usize,
  pub membership_id: Uuid,
  pub project_id: Uuid,
}

fn secret() -> Result<String, AppError> {
  std::env::var("JWT_SECRET").map_err(|_| AppError::internal_server_error("JWT_SECRET is not configured"))
}

pub fn decode_jwt(token: &str) -> Result<Claims, AppError> {
  let secret = secret()?;

  let token_data = decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_ref()),
    &Validation::default(),
  )
  .map_err(|_| AppError::unauthorized("Invalid token"))?;

  Ok(token_data.claims)
}

pub fn encode_jwt(claims: Claims) -> Result<String, AppError> {
  let secret = secret()?;

  encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_ref()))
    .map_err(|_| AppError::internal_server_error("Failed to encode token"))
}
