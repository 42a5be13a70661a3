//! Public RSVP submission.

use crate::error::AppError;
use crate::model::GuestInput;
use crate::response::RsvpCreated;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    post,
    path = "/rsvp",
    request_body = GuestInput,
    responses(
        (status = 200, description = "Guest stored", body = RsvpCreated),
        (status = 422, description = "Body does not match the guest shape")
    )
)]
pub async fn create_rsvp(
    State(state): State<AppState>,
    Json(input): Json<GuestInput>,
) -> Result<Json<RsvpCreated>, AppError> {
    let mut session = state.store.session().await?;
    let guest = session.create(input).await?;
    tracing::info!(id = guest.id, dabei = ?guest.dabei, "rsvp received");
    Ok(Json(RsvpCreated {
        success: true,
        id: guest.id,
    }))
}
