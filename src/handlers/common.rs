//! Liveness, health and readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RootBody {
    pub message: String,
    pub environment: String,
    pub version: String,
    pub uptime_seconds: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthBody {
    pub status: String,
    pub environment: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyBody {
    pub status: String,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Backend is running", body = RootBody))
)]
pub async fn root(State(state): State<AppState>) -> Json<RootBody> {
    Json(RootBody {
        message: "Backend is running!".into(),
        environment: state.environment.to_string(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.uptime_seconds(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Process is healthy", body = HealthBody))
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy".into(),
        environment: state.environment.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Database reachable", body = ReadyBody),
        (status = 503, description = "Database unreachable", body = ReadyBody)
    )
)]
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    if let Err(e) = state.store.ping().await {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded".into(),
                database: "unavailable".into(),
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ready".into(),
        database: "ok".into(),
    }))
}
