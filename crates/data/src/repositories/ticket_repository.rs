//! Per-wallet ticket cache.

use super::tickets_key;
use crate::error::StoreError;
use crate::store::KeyValueStore;
use std::sync::Arc;
use ticketing_domain::entities::{EnrichedTicket, Event, Ticket};
use ticketing_domain::enums::TicketKind;
use tracing::{debug, info, warn};

/// Repository caching each wallet's enriched tickets.
///
/// The chain stays authoritative; this cache only spares a view-function
/// round trip when rendering the dashboard.
#[derive(Clone)]
pub struct TicketRepository {
    store: Arc<dyn KeyValueStore>,
}

impl TicketRepository {
    /// Creates a new TicketRepository.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Finds the cached tickets of `address`. Nothing cached reads as empty.
    ///
    /// # Errors
    /// Returns an error for an empty address or a malformed payload.
    pub async fn find_by_owner(&self, address: &str) -> Result<Vec<EnrichedTicket>, StoreError> {
        let key = tickets_key(address)?;
        match self.store.get(&key).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Finds the cached tickets of `address`, keeping only `kind` when given.
    ///
    /// # Errors
    /// Returns an error for an empty address or a malformed payload.
    pub async fn find_by_owner_and_kind(
        &self,
        address: &str,
        kind: Option<TicketKind>,
    ) -> Result<Vec<EnrichedTicket>, StoreError> {
        let tickets = self.find_by_owner(address).await?;
        Ok(filter_by_kind(tickets, kind))
    }

    /// Replaces the cached tickets of `address`.
    ///
    /// # Errors
    /// Returns an error for an empty address or if the write fails.
    pub async fn save_for_owner(
        &self,
        address: &str,
        tickets: &[EnrichedTicket],
    ) -> Result<(), StoreError> {
        let key = tickets_key(address)?;
        let payload = serde_json::to_string(tickets)?;
        self.store.set(&key, payload).await?;
        debug!(address = address, count = tickets.len(), "Cached tickets");
        Ok(())
    }

    /// Enriches freshly queried on-chain tickets against the event catalog
    /// and caches the result for `address`.
    ///
    /// # Errors
    /// Returns an error if the cache write fails.
    pub async fn sync_from_chain(
        &self,
        address: &str,
        tickets: &[Ticket],
        events: &[Event],
    ) -> Result<Vec<EnrichedTicket>, StoreError> {
        let enriched: Vec<EnrichedTicket> = tickets
            .iter()
            .inspect(|ticket| {
                if ticket.owner != address {
                    warn!(
                        address = address,
                        owner = %ticket.owner,
                        ticket_id = ticket.ticket_id,
                        "Ticket owner differs from queried address"
                    );
                }
            })
            .map(|ticket| ticket.enrich(events))
            .collect();

        self.save_for_owner(address, &enriched).await?;
        info!(address = address, count = enriched.len(), "Synced tickets");
        Ok(enriched)
    }

    /// Drops the cached tickets of `address`.
    ///
    /// # Errors
    /// Returns an error for an empty address or if the backend fails.
    pub async fn clear(&self, address: &str) -> Result<bool, StoreError> {
        let key = tickets_key(address)?;
        self.store.remove(&key).await
    }
}

/// Keeps the tickets of `kind`; `None` keeps everything.
#[must_use]
pub fn filter_by_kind(
    tickets: Vec<EnrichedTicket>,
    kind: Option<TicketKind>,
) -> Vec<EnrichedTicket> {
    match kind {
        Some(kind) => tickets
            .into_iter()
            .filter(|t| t.ticket.kind() == kind)
            .collect(),
        None => tickets,
    }
}
