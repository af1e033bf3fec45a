//! Schema bootstrap for the vocabulary table
//!
//! Creates the table and seeds the singleton document with empty `days`
//! and `words` arrays. The document is never created by any endpoint, so
//! this runs once at startup; an existing row is left untouched.

use sqlx::PgPool;

use super::repo::DOCUMENT_KEY;

/// Run all migrations.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running vocabulary migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS vocabulary (
            key TEXT PRIMARY KEY,
            days JSONB,
            words JSONB
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Seed the singleton document; ON CONFLICT keeps existing data.
    sqlx::query(
        r#"
        INSERT INTO vocabulary (key, days, words)
        VALUES ($1, '[]'::jsonb, '[]'::jsonb)
        ON CONFLICT (key) DO NOTHING
        "#,
    )
    .bind(DOCUMENT_KEY)
    .execute(pool)
    .await?;

    Ok(())
}
