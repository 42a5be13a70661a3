//! In-process guest store for router tests.

use super::{GuestSession, GuestStore};
use crate::error::AppError;
use crate::model::{Guest, GuestInput};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: Vec<Guest>,
}

#[derive(Clone, Default)]
pub struct MemoryGuestStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryGuestStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Guest> {
        lock(&self.table).rows.clone()
    }
}

fn lock(table: &Mutex<Table>) -> MutexGuard<'_, Table> {
    table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl GuestStore for MemoryGuestStore {
    async fn session(&self) -> Result<Box<dyn GuestSession>, AppError> {
        Ok(Box::new(MemoryGuestSession {
            table: self.table.clone(),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct MemoryGuestSession {
    table: Arc<Mutex<Table>>,
}

#[async_trait]
impl GuestSession for MemoryGuestSession {
    async fn create(&mut self, input: GuestInput) -> Result<Guest, AppError> {
        let mut table = lock(&self.table);
        table.last_id += 1;
        let guest = input.into_guest(table.last_id);
        table.rows.push(guest.clone());
        Ok(guest)
    }

    async fn list(&mut self) -> Result<Vec<Guest>, AppError> {
        Ok(lock(&self.table).rows.clone())
    }

    async fn get(&mut self, id: i32) -> Result<Option<Guest>, AppError> {
        Ok(lock(&self.table).rows.iter().find(|g| g.id == id).cloned())
    }

    async fn update(&mut self, id: i32, input: GuestInput) -> Result<Option<Guest>, AppError> {
        let mut table = lock(&self.table);
        Ok(table.rows.iter_mut().find(|g| g.id == id).map(|guest| {
            input.apply_to(guest);
            guest.clone()
        }))
    }

    async fn delete(&mut self, id: i32) -> Result<bool, AppError> {
        let mut table = lock(&self.table);
        let before = table.rows.len();
        table.rows.retain(|g| g.id != id);
        Ok(table.rows.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let store = MemoryGuestStore::new();
        let mut session = store.session().await.unwrap();
        let a = session.create(GuestInput::named("A")).await.unwrap();
        assert!(session.delete(a.id).await.unwrap());
        let b = session.create(GuestInput::named("B")).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_row() {
        let store = MemoryGuestStore::new();
        let mut session = store.session().await.unwrap();
        let a = session.create(GuestInput::named("A")).await.unwrap();
        let b = session.create(GuestInput::named("B")).await.unwrap();
        let c = session.create(GuestInput::named("C")).await.unwrap();

        assert!(session.delete(b.id).await.unwrap());
        assert!(!session.delete(b.id).await.unwrap());
        assert_eq!(store.snapshot(), vec![a, c]);
    }
}
