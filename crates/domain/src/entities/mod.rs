pub mod claim;
pub mod event;
pub mod mint;
pub mod ticket;

// Re-export for easier access
pub use claim::TicketClaim;
pub use event::{Event, EventId, TicketOffer};
pub use mint::MintRequest;
pub use ticket::{EnrichedTicket, Ticket, TicketSummary};
