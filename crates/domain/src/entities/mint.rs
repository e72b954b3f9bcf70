use super::event::{Event, EventId};
use crate::enums::TicketKind;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};

/// Arguments of a ticket mint call, in contract order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintRequest {
    pub kind: TicketKind,
    pub event_id: EventId,
    /// URL the ticket's QR code resolves to: the gateway URL of the pinned
    /// QR image, or the validation URL itself when no image was pinned.
    pub qr_code_url: String,
    pub description: String,
    pub image: String,
}

impl MintRequest {
    /// # Errors
    /// Returns [`RecordError::TicketTypeNotOffered`] if `event` does not sell
    /// `kind`.
    pub fn new(
        event: &Event,
        kind: TicketKind,
        owner: &str,
        qr_code_url: impl Into<String>,
    ) -> Result<Self, RecordError> {
        if event.offer(kind).is_none() {
            return Err(RecordError::TicketTypeNotOffered {
                event_id: event.id.0,
                kind: kind.to_string(),
            });
        }
        Ok(Self {
            kind,
            event_id: event.id,
            qr_code_url: qr_code_url.into(),
            description: format!("{} ticket for user {owner}", event.name),
            image: event.image.clone(),
        })
    }

    /// Entry function to call on the `ticketing` module.
    pub fn function_name(&self) -> &'static str {
        self.kind.mint_function()
    }
}
