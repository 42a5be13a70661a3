//! Admin guest handlers: list, stats, read, overwrite, delete, export.

use crate::error::AppError;
use crate::export::{guests_to_xlsx, EXPORT_FILENAME, XLSX_CONTENT_TYPE};
use crate::model::{Guest, GuestInput};
use crate::response::GuestResult;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GuestQuery {
    /// Case-insensitive match on name or email.
    pub search: Option<String>,
}

/// Attendance counters shown on the admin dashboard.
#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct GuestStats {
    pub attending: usize,
    pub not_attending: usize,
    pub pending: usize,
    pub total: usize,
}

impl GuestStats {
    pub fn from_guests(guests: &[Guest]) -> Self {
        guests.iter().fold(
            GuestStats {
                total: guests.len(),
                ..Default::default()
            },
            |mut stats, guest| {
                match guest.dabei {
                    Some(true) => stats.attending += 1,
                    Some(false) => stats.not_attending += 1,
                    None => stats.pending += 1,
                }
                stats
            },
        )
    }
}

fn matches_search(guest: &Guest, needle: &str) -> bool {
    guest.name.to_lowercase().contains(needle)
        || guest
            .email
            .as_deref()
            .map(|email| email.to_lowercase().contains(needle))
            .unwrap_or(false)
}

#[utoipa::path(
    get,
    path = "/admin/guests",
    params(GuestQuery),
    responses((status = 200, description = "All guests in insertion order", body = Vec<Guest>))
)]
pub async fn list_guests(
    State(state): State<AppState>,
    Query(query): Query<GuestQuery>,
) -> Result<Json<Vec<Guest>>, AppError> {
    let mut session = state.store.session().await?;
    let guests = session.list().await?;
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let guests = match needle {
        Some(needle) => guests.into_iter().filter(|g| matches_search(g, &needle)).collect(),
        None => guests,
    };
    Ok(Json(guests))
}

#[utoipa::path(
    get,
    path = "/admin/guests/stats",
    responses((status = 200, description = "Attendance counters", body = GuestStats))
)]
pub async fn guest_stats(State(state): State<AppState>) -> Result<Json<GuestStats>, AppError> {
    let mut session = state.store.session().await?;
    let guests = session.list().await?;
    Ok(Json(GuestStats::from_guests(&guests)))
}

#[utoipa::path(
    get,
    path = "/admin/guests/{id}",
    params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Guest, or success=false if unknown", body = GuestResult))
)]
pub async fn get_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GuestResult>, AppError> {
    let mut session = state.store.session().await?;
    let result = match session.get(id).await? {
        Some(guest) => GuestResult::found(guest),
        None => GuestResult::not_found(),
    };
    Ok(Json(result))
}

#[utoipa::path(
    put,
    path = "/admin/guests/{id}",
    params(("id" = i32, Path, description = "Guest id")),
    request_body = GuestInput,
    responses((status = 200, description = "Updated guest, or success=false if unknown", body = GuestResult))
)]
pub async fn update_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<GuestInput>,
) -> Result<Json<GuestResult>, AppError> {
    let mut session = state.store.session().await?;
    let result = match session.update(id, input).await? {
        Some(guest) => {
            tracing::info!(id, "guest updated");
            GuestResult::found(guest)
        }
        None => {
            tracing::info!(id, "update of unknown guest");
            GuestResult::not_found()
        }
    };
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/admin/guests/{id}",
    params(("id" = i32, Path, description = "Guest id")),
    responses((status = 200, description = "Deleted, or success=false if unknown", body = GuestResult))
)]
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GuestResult>, AppError> {
    let mut session = state.store.session().await?;
    let result = if session.delete(id).await? {
        tracing::info!(id, "guest deleted");
        GuestResult::done()
    } else {
        tracing::info!(id, "delete of unknown guest");
        GuestResult::not_found()
    };
    Ok(Json(result))
}

#[utoipa::path(
    get,
    path = "/admin/guests/export",
    responses((
        status = 200,
        description = "Spreadsheet of all guests",
        body = Vec<u8>,
        content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    ))
)]
pub async fn export_guests(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut session = state.store.session().await?;
    let guests = session.list().await?;
    let bytes = guests_to_xlsx(&guests)?;
    tracing::info!(rows = guests.len(), "guest export downloaded");
    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", EXPORT_FILENAME),
        ),
    ];
    Ok((headers, bytes))
}
