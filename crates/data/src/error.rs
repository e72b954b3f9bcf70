use thiserror::Error;
use ticketing_domain::error::RecordError;

/// Errors raised by stores and repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend I/O failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Stored payload is not valid JSON for the expected record.
    #[error("Malformed stored data: {0}")]
    Json(#[from] serde_json::Error),
    /// Key cannot be used with this backend.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    /// Stored record violates a domain invariant.
    #[error("Invalid record under {key:?}: {source}")]
    InvalidRecord {
        /// Key the record was read from or written to.
        key: String,
        /// Violated invariant.
        #[source]
        source: RecordError,
    },
}
