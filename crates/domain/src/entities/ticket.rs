use super::event::{Event, EventId};
use crate::enums::TicketKind;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_EVENT_NAME: &str = "Unknown Event";
pub const UNKNOWN_EVENT_DATE: &str = "Unknown Date";
pub const UNKNOWN_EVENT_LOCATION: &str = "Unknown Location";

/// Ticket record as returned by the `get_tickets_by_user` view function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(with = "crate::serde_utils::u64_string")]
    pub ticket_id: u64,
    pub event_id: EventId,
    pub owner: String,
    pub is_soulbound: bool,
    pub is_used: bool,
    pub metadata_hash: String,
    /// Unix seconds.
    #[serde(with = "crate::serde_utils::u64_string")]
    pub purchase_time: u64,
    /// Unix seconds, `0` while unused.
    #[serde(with = "crate::serde_utils::u64_string")]
    pub usage_time: u64,
}

impl Ticket {
    pub fn kind(&self) -> TicketKind {
        TicketKind::from_soulbound_flag(self.is_soulbound)
    }

    /// Soulbound and already used tickets stay with their owner.
    pub fn can_transfer(&self) -> bool {
        self.kind().is_transferable() && !self.is_used
    }

    /// Joins the ticket with its event metadata, falling back to placeholder
    /// labels when the event is not in `events`.
    pub fn enrich(&self, events: &[Event]) -> EnrichedTicket {
        let event = events.iter().find(|e| e.id == self.event_id);
        EnrichedTicket {
            ticket: self.clone(),
            name: event.map_or(UNKNOWN_EVENT_NAME, |e| e.name.as_str()).to_owned(),
            date: event.map_or(UNKNOWN_EVENT_DATE, |e| e.date.as_str()).to_owned(),
            location: event
                .map_or(UNKNOWN_EVENT_LOCATION, |e| e.location.as_str())
                .to_owned(),
            image: event.map(|e| e.image.clone()),
        }
    }
}

/// A ticket with the display fields of its event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedTicket {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub name: String,
    pub date: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSummary {
    pub transferrable: usize,
    pub soulbound: usize,
    pub used: usize,
}

impl TicketSummary {
    pub fn from_tickets<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        tickets.into_iter().fold(Self::default(), |mut acc, ticket| {
            match ticket.kind() {
                TicketKind::Transferrable => acc.transferrable += 1,
                TicketKind::Soulbound => acc.soulbound += 1,
            }
            if ticket.is_used {
                acc.used += 1;
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.transferrable + self.soulbound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::RawAmount;

    fn ticket(id: u64, event_id: u64, is_soulbound: bool, is_used: bool) -> Ticket {
        Ticket {
            ticket_id: id,
            event_id: EventId(event_id),
            owner: "0xabc".to_owned(),
            is_soulbound,
            is_used,
            metadata_hash: "bafkreihash".to_owned(),
            purchase_time: 1_700_000_000,
            usage_time: 0,
        }
    }

    #[test]
    fn test_deserialize_view_output() {
        let json = r#"{
            "event_id": "2",
            "is_soulbound": true,
            "is_used": false,
            "metadata_hash": "https://gateway.example/ipfs/qr",
            "owner": "0x1234",
            "purchase_time": "1736000000",
            "ticket_id": "7",
            "usage_time": "0"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.ticket_id, 7);
        assert_eq!(ticket.event_id, EventId(2));
        assert_eq!(ticket.kind(), TicketKind::Soulbound);
        assert!(!ticket.can_transfer());
    }

    #[test]
    fn test_can_transfer() {
        assert!(ticket(1, 1, false, false).can_transfer());
        assert!(!ticket(2, 1, false, true).can_transfer());
        assert!(!ticket(3, 1, true, false).can_transfer());
    }

    #[test]
    fn test_enrich_known_event() {
        let events = vec![
            Event::new(1u64, "Blockchain Summit", "June 22, 2025", "New York, NY", "img")
                .with_offer(TicketKind::Soulbound, RawAmount::from(100_000_000u64)),
        ];
        let enriched = ticket(1, 1, true, false).enrich(&events);
        assert_eq!(enriched.name, "Blockchain Summit");
        assert_eq!(enriched.location, "New York, NY");
        assert_eq!(enriched.image.as_deref(), Some("img"));
    }

    #[test]
    fn test_enrich_unknown_event() {
        let enriched = ticket(1, 99, false, false).enrich(&[]);
        assert_eq!(enriched.name, UNKNOWN_EVENT_NAME);
        assert_eq!(enriched.date, UNKNOWN_EVENT_DATE);
        assert_eq!(enriched.location, UNKNOWN_EVENT_LOCATION);
        assert_eq!(enriched.image, None);

        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["ticket_id"], "1");
        assert_eq!(value["name"], UNKNOWN_EVENT_NAME);
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_summary() {
        let tickets = [
            ticket(1, 1, false, false),
            ticket(2, 1, true, false),
            ticket(3, 2, false, true),
        ];
        let summary = TicketSummary::from_tickets(&tickets);
        assert_eq!(summary.transferrable, 2);
        assert_eq!(summary.soulbound, 1);
        assert_eq!(summary.used, 1);
        assert_eq!(summary.total(), 3);
    }
}
