//! Event catalog repository.

use super::{EVENTS_KEY, default_events};
use crate::error::StoreError;
use crate::store::KeyValueStore;
use std::sync::Arc;
use ticketing_domain::entities::{Event, EventId};
use tracing::{debug, info};

/// Repository for the off-chain event catalog.
#[derive(Clone)]
pub struct EventRepository {
    store: Arc<dyn KeyValueStore>,
}

impl EventRepository {
    /// Creates a new EventRepository.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored catalog, or `None` if it was never written.
    ///
    /// # Errors
    /// Returns an error if the payload is malformed or an event violates its
    /// invariants.
    pub async fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        let Some(raw) = self.store.get(EVENTS_KEY).await? else {
            return Ok(None);
        };
        let events: Vec<Event> = serde_json::from_str(&raw)?;
        for event in &events {
            event.validate().map_err(|source| StoreError::InvalidRecord {
                key: EVENTS_KEY.to_owned(),
                source,
            })?;
        }
        Ok(Some(events))
    }

    /// Finds all events. An unwritten catalog reads as empty.
    ///
    /// # Errors
    /// Returns an error if the stored catalog cannot be decoded.
    pub async fn find_all(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.load().await?.unwrap_or_default())
    }

    /// Finds an event by its ID.
    ///
    /// # Errors
    /// Returns an error if the stored catalog cannot be decoded.
    pub async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let events = self.find_all().await?;
        Ok(events.into_iter().find(|event| event.id == id))
    }

    /// Replaces the catalog.
    ///
    /// # Errors
    /// Returns an error if an event violates its invariants or the write
    /// fails.
    pub async fn save_all(&self, events: &[Event]) -> Result<(), StoreError> {
        for event in events {
            event.validate().map_err(|source| StoreError::InvalidRecord {
                key: EVENTS_KEY.to_owned(),
                source,
            })?;
        }
        let payload = serde_json::to_string(events)?;
        self.store.set(EVENTS_KEY, payload).await?;
        debug!(count = events.len(), "Saved event catalog");
        Ok(())
    }

    /// Returns the catalog, writing [`default_events`] first if none is
    /// stored.
    ///
    /// # Errors
    /// Returns an error if reading or seeding fails.
    pub async fn load_or_seed(&self) -> Result<Vec<Event>, StoreError> {
        if let Some(events) = self.load().await? {
            return Ok(events);
        }
        let events = default_events();
        self.save_all(&events).await?;
        info!(count = events.len(), "Seeded default event catalog");
        Ok(events)
    }
}
