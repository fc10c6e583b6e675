use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub async fn create_pool() -> anyhow::Result<PgPool> {
  let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set")?;

  let pool = PgPoolOptions::new()
    .max_connections(5)
    .connect(&database_url)
    .await
    .context("Failed to connect to the database")?;

  Ok(pool)
}
