//! Schema migrations for the albums table

use sqlx::PgPool;

/// Create the albums table if it does not exist.
///
/// Prices are DOUBLE PRECISION so every `f64` the API accepts round-trips.
/// Tables created with the older `NUMERIC(10, 2)` column are converted.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running album migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS albums (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            artist TEXT NOT NULL DEFAULT '',
            price DOUBLE PRECISION NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("ALTER TABLE albums ALTER COLUMN price TYPE DOUBLE PRECISION")
        .execute(pool)
        .await?;

    tracing::info!("Album migrations complete");
    Ok(())
}
