use tokio::signal;

use dotenvy::dotenv;

use mailgate_api::app::create_app;
use mailgate_api::db::pool::create_pool;
use mailgate_api::email::{SmtpConfig, SmtpEmailService};
use mailgate_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let pool = create_pool().await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database migrations applied successfully");

  let email_service = SmtpEmailService::new(SmtpConfig::from_env()?)?;
  let app_state = SharedAppState::new(pool, email_service);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;

  tracing::info!("Server running on http://0.0.0.0:8000");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
