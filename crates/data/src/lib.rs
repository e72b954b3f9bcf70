//! Persistence for ticketing metadata.
//!
//! Event metadata and per-wallet ticket lists are cached off-chain in a
//! key-value store. Repositories give them typed read/write contracts.

/// Storage errors.
pub mod error;
/// Typed repositories over a key-value store.
pub mod repositories;
/// Key-value backends.
pub mod store;

pub use error::StoreError;
pub use repositories::{EventRepository, Storage, TicketRepository, filter_by_kind};
pub use store::{FileStore, KeyValueStore, MemoryStore};
