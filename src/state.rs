//! Shared application state for all routes.

use crate::store::GuestStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; each request opens its own session from it.
    pub store: Arc<dyn GuestStore>,
    pub environment: Arc<str>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn GuestStore>, environment: &str) -> Self {
        AppState {
            store,
            environment: Arc::from(environment),
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
