use thiserror::Error;

/// Raised when a raw balance is not a non-empty string of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Balance must be a string of digits, got {input:?}")]
pub struct InvalidAmountError {
    /// The rejected input.
    pub input: String,
}

impl InvalidAmountError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Errors raised while parsing or validating ticketing records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Amount field is malformed.
    #[error(transparent)]
    InvalidAmount(#[from] InvalidAmountError),
    /// Event identifier is not an unsigned integer.
    #[error("Invalid event id: {0:?}")]
    InvalidEventId(String),
    /// Ticket kind is neither transferrable nor soulbound.
    #[error("Unknown ticket type: {0:?}")]
    UnknownTicketKind(String),
    /// Event offers no ticket types.
    #[error("Event {event_id} offers no ticket types")]
    NoTicketTypes {
        /// Offending event.
        event_id: u64,
    },
    /// Event offers the same ticket type more than once.
    #[error("Event {event_id} offers {kind} tickets more than once")]
    DuplicateTicketType {
        /// Offending event.
        event_id: u64,
        /// Repeated kind.
        kind: String,
    },
    /// Event does not sell the requested ticket type.
    #[error("Event {event_id} does not offer {kind} tickets")]
    TicketTypeNotOffered {
        /// Event that was asked.
        event_id: u64,
        /// Requested kind.
        kind: String,
    },
    /// Validation claim could not be decoded.
    #[error("Invalid ticket claim: {0:?}")]
    InvalidClaim(String),
}
