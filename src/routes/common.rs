//! Common routes: liveness, health, readiness, API document.

use crate::handlers::common::{health, ready, root};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /, GET /health, GET /ready, GET /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
