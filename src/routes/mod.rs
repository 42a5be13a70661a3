//! Router assembly: route groups plus CORS and request tracing.

mod admin;
mod common;
mod rsvp;

pub use admin::admin_routes;
pub use common::common_routes;
pub use rsvp::rsvp_routes;

use crate::config::{AppConfig, CorsOrigins};
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = match &config.cors_origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(config.cors_methods.clone())
        .allow_headers(Any)
}

/// Full application router.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(rsvp_routes(state.clone()))
        .merge(admin_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(config)),
        )
}
