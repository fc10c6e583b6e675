use axum::{middleware, response::Html, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{domains::email::rest::email_routes, middleware::auth::require_membership, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(index_handler))
    .nest(
      "/email/v1",
      email_routes().layer(middleware::from_fn(require_membership)),
    )
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn index_handler() -> Html<&'static str> {
  Html("<h1>Mailgate API</h1>")
}
