use crate::enums::TicketKind;
use crate::error::RecordError;
use crate::formatting::{CurrencyValue, FormatOptions};
use crate::value_objects::RawAmount;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// On-chain event identifier. Serialized as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(#[serde(with = "crate::serde_utils::u64_string")] pub u64);

impl From<u64> for EventId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl FromStr for EventId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self)
            .map_err(|_| RecordError::InvalidEventId(s.to_owned()))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ticket type an event sells, priced in raw native-token units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOffer {
    #[serde(rename = "type")]
    pub kind: TicketKind,
    pub price: RawAmount,
}

impl TicketOffer {
    /// Price rendered in the native token, e.g. `"1.00 MOVE"`.
    pub fn price_label(&self) -> CurrencyValue {
        CurrencyValue::new(self.price.clone(), FormatOptions::default())
            .with_currency_code(crate::formatting::NATIVE_CURRENCY_CODE)
    }
}

/// Event metadata kept off-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
    pub location: String,
    pub ticket_types: Vec<TicketOffer>,
    /// Gateway URL of the event artwork.
    pub image: String,
}

impl Event {
    pub fn new(
        id: impl Into<EventId>,
        name: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            location: location.into(),
            ticket_types: Vec::new(),
            image: image.into(),
        }
    }

    #[must_use]
    pub fn with_offer(mut self, kind: TicketKind, price: RawAmount) -> Self {
        self.ticket_types.push(TicketOffer { kind, price });
        self
    }

    /// Checks that the event sells at least one ticket type and no type
    /// twice.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.ticket_types.is_empty() {
            return Err(RecordError::NoTicketTypes { event_id: self.id.0 });
        }
        let mut seen = HashSet::new();
        for offer in &self.ticket_types {
            if !seen.insert(offer.kind) {
                return Err(RecordError::DuplicateTicketType {
                    event_id: self.id.0,
                    kind: offer.kind.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Kind preselected for purchase: the first one offered.
    pub fn default_kind(&self) -> Option<TicketKind> {
        self.ticket_types.first().map(|offer| offer.kind)
    }

    pub fn offer(&self, kind: TicketKind) -> Option<&TicketOffer> {
        self.ticket_types.iter().find(|offer| offer.kind == kind)
    }
}
