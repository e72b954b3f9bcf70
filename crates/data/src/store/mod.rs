//! Key-value backends for off-chain ticketing metadata.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use async_trait::async_trait;

/// String-keyed store of JSON payloads.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Deletes `key`. Returns whether a value was present.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;
}
