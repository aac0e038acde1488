use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL connection pool and makes sure the scan history table exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    ensure_schema(&pool).await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resume_scans (
            id          UUID PRIMARY KEY,
            kind        TEXT NOT NULL,
            resume_text TEXT NOT NULL,
            score       INTEGER,
            result      JSONB NOT NULL,
            created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS resume_scans_created_at_idx ON resume_scans (created_at DESC)",
    )
    .execute(pool)
    .await?;

    Ok(())
}
