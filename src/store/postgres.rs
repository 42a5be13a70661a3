//! PostgreSQL-backed guest store.

use super::{GuestSession, GuestStore};
use crate::error::AppError;
use crate::migration::GUEST_TABLE;
use crate::model::{Guest, GuestInput};
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

const GUEST_COLUMNS: &str =
    "id, name, essenswunsch, dabei, email, anreise, essen_fr, essen_sa, essen_so, essen_mitbringsel, unterkunft";

/// Open the connection pool. Call once at startup and `close()` it on shutdown.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PgGuestStore {
    pool: PgPool,
}

impl PgGuestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestStore for PgGuestStore {
    async fn session(&self) -> Result<Box<dyn GuestSession>, AppError> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PgGuestSession { conn }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// One pooled connection; released back to the pool on drop.
pub struct PgGuestSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl GuestSession for PgGuestSession {
    async fn create(&mut self, input: GuestInput) -> Result<Guest, AppError> {
        let sql = format!(
            r#"
            INSERT INTO {} (name, essenswunsch, dabei, email, anreise, essen_fr, essen_sa, essen_so, essen_mitbringsel, unterkunft)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            GUEST_TABLE, GUEST_COLUMNS
        );
        tracing::debug!(sql = %sql, "create guest");
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(input.name)
            .bind(input.essenswunsch)
            .bind(input.dabei)
            .bind(input.email)
            .bind(input.anreise)
            .bind(input.essen_fr)
            .bind(input.essen_sa)
            .bind(input.essen_so)
            .bind(input.essen_mitbringsel)
            .bind(input.unterkunft)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(guest)
    }

    async fn list(&mut self) -> Result<Vec<Guest>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id", GUEST_COLUMNS, GUEST_TABLE);
        tracing::debug!(sql = %sql, "list guests");
        let guests = sqlx::query_as::<_, Guest>(&sql)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(guests)
    }

    async fn get(&mut self, id: i32) -> Result<Option<Guest>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", GUEST_COLUMNS, GUEST_TABLE);
        tracing::debug!(sql = %sql, id, "get guest");
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(guest)
    }

    async fn update(&mut self, id: i32, input: GuestInput) -> Result<Option<Guest>, AppError> {
        let sql = format!(
            r#"
            UPDATE {} SET
                name = $2,
                essenswunsch = $3,
                dabei = $4,
                email = $5,
                anreise = $6,
                essen_fr = $7,
                essen_sa = $8,
                essen_so = $9,
                essen_mitbringsel = $10,
                unterkunft = $11
            WHERE id = $1
            RETURNING {}
            "#,
            GUEST_TABLE, GUEST_COLUMNS
        );
        tracing::debug!(sql = %sql, id, "update guest");
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(id)
            .bind(input.name)
            .bind(input.essenswunsch)
            .bind(input.dabei)
            .bind(input.email)
            .bind(input.anreise)
            .bind(input.essen_fr)
            .bind(input.essen_sa)
            .bind(input.essen_so)
            .bind(input.essen_mitbringsel)
            .bind(input.unterkunft)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(guest)
    }

    async fn delete(&mut self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", GUEST_TABLE);
        tracing::debug!(sql = %sql, id, "delete guest");
        let result = sqlx::query(&sql).bind(id).execute(&mut *self.conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
