//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use ticketing_domain::prelude::*;
//! ```

pub use crate::entities::{
    EnrichedTicket, Event, EventId, MintRequest, Ticket, TicketClaim, TicketOffer, TicketSummary,
};
pub use crate::enums::TicketKind;
pub use crate::error::{InvalidAmountError, RecordError};
pub use crate::formatting::{
    CurrencyValue, DEFAULT_DECIMALS, DEFAULT_FIXED_DECIMAL_PLACES, FormatOptions,
    MAX_FIXED_DECIMAL_PLACES, NATIVE_CURRENCY_CODE, format_amount, format_balance_str,
};
pub use crate::value_objects::RawAmount;
