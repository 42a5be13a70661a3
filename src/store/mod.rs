//! Guest persistence behind a session-per-request seam.
//!
//! A [`GuestStore`] lives for the whole process and hands out [`GuestSession`]s. A session holds
//! one database connection; dropping it returns the connection. Every mutating call commits on
//! its own, nothing spans more than one statement.

mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::{create_pool, PgGuestSession, PgGuestStore};

use crate::error::AppError;
use crate::model::{Guest, GuestInput};
use async_trait::async_trait;

#[async_trait]
pub trait GuestStore: Send + Sync {
    /// Acquire a session for one request.
    async fn session(&self) -> Result<Box<dyn GuestSession>, AppError>;

    /// Cheap reachability check for `/ready`.
    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait GuestSession: Send {
    /// Insert a new guest; the id is assigned by the store.
    async fn create(&mut self, input: GuestInput) -> Result<Guest, AppError>;

    /// All guests in insertion (id) order.
    async fn list(&mut self) -> Result<Vec<Guest>, AppError>;

    async fn get(&mut self, id: i32) -> Result<Option<Guest>, AppError>;

    /// Overwrite every mutable field. `None` if no such guest; nothing is written then.
    async fn update(&mut self, id: i32, input: GuestInput) -> Result<Option<Guest>, AppError>;

    /// `false` if no such guest.
    async fn delete(&mut self, id: i32) -> Result<bool, AppError>;
}
