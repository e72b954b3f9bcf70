//! Repository implementations for off-chain ticketing metadata.
//!
//! Records are stored as JSON under fixed keys: the event catalog under
//! [`EVENTS_KEY`] and each wallet's enriched ticket list under
//! `tickets-<address>`.

mod event_repository;
mod seed;
mod ticket_repository;

pub use event_repository::EventRepository;
pub use seed::default_events;
pub use ticket_repository::{TicketRepository, filter_by_kind};

use crate::error::StoreError;
use crate::store::{FileStore, KeyValueStore, MemoryStore};
use std::path::PathBuf;
use std::sync::Arc;

/// Key of the event catalog.
pub const EVENTS_KEY: &str = "events";

/// Key of a wallet's cached ticket list.
///
/// # Errors
/// Returns [`StoreError::InvalidKey`] for an empty address.
pub fn tickets_key(address: &str) -> Result<String, StoreError> {
    if address.trim().is_empty() {
        return Err(StoreError::InvalidKey(format!("tickets-{address}")));
    }
    Ok(format!("tickets-{address}"))
}

/// Shared handle to a store, handing out repositories.
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Wraps an existing store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates storage backed by a fresh [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Creates storage backed by a [`FileStore`] rooted at `dir`.
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStore::new(dir)))
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Creates an EventRepository instance.
    #[must_use]
    pub fn events(&self) -> EventRepository {
        EventRepository::new(self.store.clone())
    }

    /// Creates a TicketRepository instance.
    #[must_use]
    pub fn tickets(&self) -> TicketRepository {
        TicketRepository::new(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_key() {
        assert_eq!(tickets_key("0xabc").unwrap(), "tickets-0xabc");
        assert!(matches!(tickets_key(""), Err(StoreError::InvalidKey(_))));
        assert!(matches!(tickets_key("  "), Err(StoreError::InvalidKey(_))));
    }
}
