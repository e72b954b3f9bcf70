use ticketing_domain::entities::Event;
use ticketing_domain::enums::TicketKind;
use ticketing_domain::value_objects::RawAmount;

const GATEWAY: &str = "https://copper-fashionable-dolphin-815.mypinata.cloud/ipfs";

/// One MOVE in octas.
const ONE_MOVE: u64 = 100_000_000;

/// Catalog written when no events are stored yet.
pub fn default_events() -> Vec<Event> {
    let price = || RawAmount::from(ONE_MOVE);
    let image = |cid: &str| format!("{GATEWAY}/{cid}");

    vec![
        Event::new(
            1u64,
            "Web3 Conference 2025",
            "May 15, 2025",
            "San Francisco, CA",
            image("bafkreihagbrmpnhs3pom7h6n44j35ozxcjpfv4bnnqcqlnkmzs3jpjfrvq"),
        )
        .with_offer(TicketKind::Transferrable, price())
        .with_offer(TicketKind::Soulbound, price()),
        Event::new(
            2u64,
            "Blockchain Summit",
            "June 22, 2025",
            "New York, NY",
            image("bafkreibg7ptr5pstg4ow4iyq2uublhichscosqnhaiepyyv6wudrgr6uxy"),
        )
        .with_offer(TicketKind::Soulbound, price()),
        Event::new(
            3u64,
            "ETH Global Hackathon",
            "July 10, 2025",
            "Berlin, Germany",
            image("bafkreib6wskjwqcumwwaboyptk2awizubpj5jec7yuai45ochb2n6yt5f4"),
        )
        .with_offer(TicketKind::Transferrable, price()),
        Event::new(
            4u64,
            "DeFi Conference",
            "August 5, 2025",
            "Singapore",
            image("bafkreigmw3cz7lj63763d35bc6656imy2vnllhxgjzwdgwimgzgg4o2k3i"),
        )
        .with_offer(TicketKind::Transferrable, price())
        .with_offer(TicketKind::Soulbound, price()),
        Event::new(
            5u64,
            "NFT Exhibition",
            "September 18, 2025",
            "London, UK",
            image("bafkreiejbp6xr2wqryvbi7gl52vtwx7i44fmpn2r6pd2z53ca7dmjmydlq"),
        )
        .with_offer(TicketKind::Transferrable, price())
        .with_offer(TicketKind::Soulbound, price()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_events_are_valid() {
        let events = default_events();
        assert_eq!(events.len(), 5);
        for event in &events {
            event.validate().unwrap();
            for offer in &event.ticket_types {
                assert_eq!(offer.price_label().to_string(), "1.00 MOVE");
            }
        }
    }
}
