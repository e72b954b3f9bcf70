//! Command Line Interface for the NFT ticketing core.
mod config;
mod import;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use config::Config;
use prettytable::{Table, row};
use std::path::PathBuf;
use ticketing_data::{Storage, filter_by_kind};
use ticketing_domain::prelude::*;
use tracing::{debug, info};

const MAX_PLACES: i64 = MAX_FIXED_DECIMAL_PLACES as i64;

#[derive(Parser)]
#[command(name = "ticketing")]
#[command(about = "NFT ticketing toolkit: balances, event catalog and ticket cache", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a raw on-chain balance
    Format {
        /// Balance in the token's smallest unit (digits only)
        amount: String,

        /// Decimal exponent of the token; negative values use the default
        #[arg(long, allow_hyphen_values = true)]
        decimals: Option<i32>,

        /// Minimum digits after the decimal point
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PLACES))]
        places: Option<u32>,
    },
    /// Format a possibly negative balance with its currency code
    Currency {
        /// Balance in the token's smallest unit, optionally prefixed by "-"
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Decimal exponent of the token; negative values use the default
        #[arg(long, allow_hyphen_values = true)]
        decimals: Option<i32>,

        /// Minimum digits after the decimal point
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_PLACES))]
        places: Option<u32>,

        /// Currency code shown after the amount
        #[arg(long, default_value = NATIVE_CURRENCY_CODE)]
        code: String,
    },
    /// List the event catalog, seeding it on first use
    Events,
    /// Show the cached tickets of a wallet
    Tickets {
        /// Wallet address
        address: String,

        /// JSON output of `get_tickets_by_user` to enrich and cache first
        #[arg(long)]
        import: Option<PathBuf>,

        /// Only list one ticket type (transferrable or soulbound)
        #[arg(long)]
        kind: Option<String>,
    },
    /// Build the validation URL and mint arguments for a ticket
    Claim {
        /// Wallet address of the buyer
        address: String,

        /// Event ID
        event_id: u64,

        /// Ticket type (transferrable or soulbound); defaults to the event's first offer
        #[arg(long)]
        kind: Option<String>,

        /// Gateway URL of the pinned QR code image; defaults to the validation URL
        #[arg(long)]
        qr_url: Option<String>,
    },
    /// Decode a validation URL scanned from a ticket
    Verify {
        /// Validation URL or `<owner>_<event id>` token
        claim: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Config::from_env();
    debug!(data_dir = %config.data_dir.display(), "Loaded configuration");

    let storage = Storage::open(&config.data_dir);

    match cli.command {
        Commands::Format {
            amount,
            decimals,
            places,
        } => {
            println!("{}", format_balance_str(&amount, decimals, places)?);
        }
        Commands::Currency {
            amount,
            decimals,
            places,
            code,
        } => {
            let options = FormatOptions::resolve(decimals, places);
            let value = CurrencyValue::native(&amount, options)?.with_currency_code(code);
            println!("{value}");
        }
        Commands::Events => {
            let events = storage.events().load_or_seed().await?;

            let mut table = Table::new();
            table.set_titles(row!["ID", "Name", "Date", "Location", "Tickets"]);
            for event in &events {
                let offers = event
                    .ticket_types
                    .iter()
                    .map(|offer| format!("{}: {}", offer.kind, offer.price_label()))
                    .collect::<Vec<_>>()
                    .join("\n");
                table.add_row(row![event.id, event.name, event.date, event.location, offers]);
            }
            table.printstd();
        }
        Commands::Tickets {
            address,
            import: import_path,
            kind,
        } => {
            let kind = kind.map(|k| k.parse::<TicketKind>()).transpose()?;
            let tickets = match import_path {
                Some(path) => {
                    let json = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("reading {}", path.display()))?;
                    let on_chain = import::parse_view_output(&json)?;
                    let events = storage.events().load_or_seed().await?;
                    info!(count = on_chain.len(), path = %path.display(), "Importing tickets");
                    storage
                        .tickets()
                        .sync_from_chain(&address, &on_chain, &events)
                        .await?
                }
                None => storage.tickets().find_by_owner(&address).await?,
            };
            let tickets = filter_by_kind(tickets, kind);

            if tickets.is_empty() {
                println!("No tickets found");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_titles(row!["Ticket", "Event", "Date", "Location", "Type", "Status", "Purchased"]);
            for enriched in &tickets {
                let ticket = &enriched.ticket;
                let purchased = purchased_label(ticket.purchase_time);
                let status = if ticket.is_used { "used" } else { "valid" };
                table.add_row(row![
                    ticket.ticket_id,
                    enriched.name,
                    enriched.date,
                    enriched.location,
                    ticket.kind(),
                    status,
                    purchased
                ]);
            }
            table.printstd();

            let summary = TicketSummary::from_tickets(tickets.iter().map(|t| &t.ticket));
            println!(
                "Total: {}  Transferrable: {}  Soulbound: {}  Used: {}",
                summary.total(),
                summary.transferrable,
                summary.soulbound,
                summary.used
            );
        }
        Commands::Claim {
            address,
            event_id,
            kind,
            qr_url,
        } => {
            let Some(event) = find_event(&storage, EventId(event_id)).await? else {
                bail!("event {event_id} not found");
            };
            let kind = match kind {
                Some(kind) => kind.parse::<TicketKind>()?,
                None => event
                    .default_kind()
                    .context("event offers no ticket types")?,
            };

            let claim = TicketClaim::new(address.as_str(), event.id);
            let validation_url = claim.validation_url(&config.validate_base_url);
            let qr_code_url = qr_url.unwrap_or_else(|| validation_url.clone());
            let request = MintRequest::new(&event, kind, &address, qr_code_url)?;
            let price = event
                .offer(kind)
                .map(|offer| offer.price_label().to_string())
                .unwrap_or_default();

            println!("Validation URL: {validation_url}");
            println!("Price:          {price}");
            println!("Function:       ticketing::{}", request.function_name());
            println!("Arguments:");
            println!("  event_id:     {}", request.event_id);
            println!("  qr_code:      {}", request.qr_code_url);
            println!("  description:  {}", request.description);
            println!("  image:        {}", request.image);
        }
        Commands::Verify { claim } => {
            let claim = TicketClaim::parse(&claim)?;
            let event = find_event(&storage, claim.event_id).await?;

            println!("Owner: {}", claim.owner);
            match event {
                Some(event) => println!(
                    "Event: {} ({}, {}, {})",
                    event.id, event.name, event.date, event.location
                ),
                None => println!("Event: {} (not in catalog)", claim.event_id),
            }
        }
    }

    Ok(())
}

/// Looks an event up, seeding the catalog on first use.
async fn find_event(storage: &Storage, id: EventId) -> Result<Option<Event>> {
    let events = storage.events().load_or_seed().await?;
    Ok(events.into_iter().find(|event| event.id == id))
}

/// Purchase time as `YYYY-MM-DD HH:MM` UTC, or `-` when out of range.
fn purchased_label(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned())
}
