//! OpenAPI document served at `/openapi.json`.

use crate::handlers::{common, guests, rsvp};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        common::root,
        common::health,
        common::ready,
        rsvp::create_rsvp,
        guests::list_guests,
        guests::guest_stats,
        guests::get_guest,
        guests::update_guest,
        guests::delete_guest,
        guests::export_guests,
    ),
    components(schemas(
        crate::model::Guest,
        crate::model::GuestInput,
        crate::response::RsvpCreated,
        crate::response::GuestResult,
        guests::GuestStats,
        common::RootBody,
        common::HealthBody,
        common::ReadyBody,
    )),
    tags((name = "hochzeit-rsvp", description = "Wedding RSVP and guest administration"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
