//! Decoding of `get_tickets_by_user` view output.

use anyhow::{Context, Result};
use serde_json::Value;
use ticketing_domain::entities::Ticket;

/// Parses view-function output into tickets.
///
/// View calls return an array of return values, so the ticket list usually
/// arrives wrapped as `[[ticket, ...]]`; a bare `[ticket, ...]` is accepted
/// too.
pub fn parse_view_output(json: &str) -> Result<Vec<Ticket>> {
    let value: Value = serde_json::from_str(json).context("view output is not JSON")?;

    let list = match value {
        Value::Array(items) if items.first().is_some_and(Value::is_array) => items
            .into_iter()
            .next()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        other => other,
    };

    serde_json::from_value(list).context("view output is not a ticket list")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICKET: &str = r#"{
        "event_id": "1",
        "is_soulbound": false,
        "is_used": false,
        "metadata_hash": "https://gateway.example/ipfs/qr",
        "owner": "0xabc",
        "purchase_time": "1736000000",
        "ticket_id": "4",
        "usage_time": "0"
    }"#;

    #[test]
    fn test_wrapped_output() {
        let tickets = parse_view_output(&format!("[[{TICKET}]]")).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].ticket_id, 4);
    }

    #[test]
    fn test_bare_list() {
        let tickets = parse_view_output(&format!("[{TICKET},{TICKET}]")).unwrap();
        assert_eq!(tickets.len(), 2);
    }

    #[test]
    fn test_empty_results() {
        assert!(parse_view_output("[[]]").unwrap().is_empty());
        assert!(parse_view_output("[]").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_view_output("not json").is_err());
        assert!(parse_view_output(r#"[{"ticket_id": "x"}]"#).is_err());
    }
}
