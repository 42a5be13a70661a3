//! Wedding RSVP backend: guest submissions, admin listing and editing, spreadsheet export.

pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use migration::ensure_guest_table;
pub use model::{Guest, GuestInput};
pub use routes::app;
pub use state::AppState;
pub use store::{create_pool, GuestSession, GuestStore, PgGuestStore};
