use crate::handlers::rsvp::create_rsvp;
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn rsvp_routes(state: AppState) -> Router {
    Router::new().route("/rsvp", post(create_rsvp)).with_state(state)
}
