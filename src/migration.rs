//! Startup DDL for the `guest` table. Idempotent; there is no versioned migration history.

use crate::error::AppError;
use sqlx::PgPool;

pub const GUEST_TABLE: &str = "guest";

/// Create the guest table if missing, then add columns introduced after the first schema.
pub async fn ensure_guest_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            essenswunsch TEXT,
            dabei BOOLEAN,
            email TEXT,
            anreise TEXT,
            essen_fr BOOLEAN,
            essen_sa BOOLEAN,
            essen_so BOOLEAN,
            essen_mitbringsel TEXT,
            unterkunft TEXT
        )
        "#,
        GUEST_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;

    // Tables created before the potluck field existed.
    let alter_mitbringsel = format!(
        "ALTER TABLE {} ADD COLUMN IF NOT EXISTS essen_mitbringsel TEXT",
        GUEST_TABLE
    );
    sqlx::query(&alter_mitbringsel).execute(pool).await?;

    tracing::info!(table = GUEST_TABLE, "guest table ready");
    Ok(())
}
