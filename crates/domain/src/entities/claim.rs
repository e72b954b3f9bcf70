use super::event::EventId;
use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;

const VALIDATE_SEGMENT: &str = "/validate/";

/// Ownership claim encoded in a ticket's QR code: `<owner>_<event id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketClaim {
    pub owner: String,
    pub event_id: EventId,
}

impl TicketClaim {
    pub fn new(owner: impl Into<String>, event_id: impl Into<EventId>) -> Self {
        Self {
            owner: owner.into(),
            event_id: event_id.into(),
        }
    }

    /// URL the QR code points at, e.g.
    /// `http://localhost:3000/validate/0xabc_1`.
    pub fn validation_url(&self, base_url: &str) -> String {
        format!(
            "{}{}{}",
            base_url.trim_end_matches('/'),
            VALIDATE_SEGMENT,
            self
        )
    }

    /// Decodes a claim from a validation URL or from its bare
    /// `<owner>_<event id>` token.
    ///
    /// # Errors
    /// Returns [`RecordError::InvalidClaim`] when the owner is empty or the
    /// event id is not numeric.
    pub fn parse(input: &str) -> Result<Self, RecordError> {
        let invalid = || RecordError::InvalidClaim(input.to_owned());

        let token = match input.rfind(VALIDATE_SEGMENT) {
            Some(idx) => &input[idx + VALIDATE_SEGMENT.len()..],
            None => input,
        };
        let token = token.trim().trim_end_matches('/');

        let (owner, event_id) = token.rsplit_once('_').ok_or_else(invalid)?;
        if owner.is_empty() || owner.contains('/') {
            return Err(invalid());
        }
        let event_id = event_id.parse::<EventId>().map_err(|_| invalid())?;

        Ok(Self::new(owner, event_id))
    }
}

impl fmt::Display for TicketClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.owner, self.event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_url() {
        let claim = TicketClaim::new("0xabc", 1u64);
        assert_eq!(
            claim.validation_url("http://localhost:3000/"),
            "http://localhost:3000/validate/0xabc_1"
        );
    }

    #[test]
    fn test_parse_url_and_token() {
        let claim = TicketClaim::parse("https://tickets.example/validate/0xdead_beef_12").unwrap();
        assert_eq!(claim.owner, "0xdead_beef");
        assert_eq!(claim.event_id, EventId(12));

        let claim = TicketClaim::parse("0xabc_3").unwrap();
        assert_eq!(claim, TicketClaim::new("0xabc", 3u64));

        let url = claim.validation_url("http://localhost:3000");
        assert_eq!(TicketClaim::parse(&url).unwrap(), claim);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "0xabc",
            "_3",
            "0xabc_",
            "0xabc_x",
            "http://localhost:3000/validate/",
            "a/b_1",
        ] {
            assert_eq!(
                TicketClaim::parse(input),
                Err(RecordError::InvalidClaim(input.to_owned())),
                "{input}"
            );
        }
    }
}
