use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// Pool against `TEST_DATABASE_URL`, with the projects table in place.
/// Returns `None` when no test database is configured so the suite can
/// run without Postgres.
pub async fn test_pool() -> Result<Option<PgPool>> {
    let _ = dotenvy::dotenv();

    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => url,
        _ => {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return Ok(None);
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .context("failed to connect to TEST_DATABASE_URL")?;

    // Concurrent test binaries may race on CREATE TABLE IF NOT EXISTS
    if let Err(e) = sqlx::query(SCHEMA).execute(&pool).await {
        let exists: Option<String> = sqlx::query_scalar("SELECT to_regclass('projects')::text")
            .fetch_one(&pool)
            .await?;
        if exists.is_none() {
            return Err(e).context("failed to create projects table");
        }
    }

    Ok(Some(pool))
}
