//! Admin guest routes. No authentication is applied here.
//! Static segments (`stats`, `export`) take precedence over the `:id` parameter.

use crate::handlers::guests::{
    delete_guest, export_guests, get_guest, guest_stats, list_guests, update_guest,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/admin/guests", get(list_guests))
        .route("/admin/guests/stats", get(guest_stats))
        .route("/admin/guests/export", get(export_guests))
        .route(
            "/admin/guests/:id",
            get(get_guest).put(update_guest).delete(delete_guest),
        )
        .with_state(state)
}
