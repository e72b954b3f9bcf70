use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a ticket NFT may leave its original owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    /// Can be sent to another wallet.
    #[serde(alias = "transferable")]
    Transferrable,
    /// Bound permanently to the minting wallet.
    Soulbound,
}

impl TicketKind {
    pub fn from_soulbound_flag(is_soulbound: bool) -> Self {
        if is_soulbound {
            Self::Soulbound
        } else {
            Self::Transferrable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transferrable => "transferrable",
            Self::Soulbound => "soulbound",
        }
    }

    /// Entry function of the `ticketing` module that mints this kind.
    pub fn mint_function(&self) -> &'static str {
        match self {
            Self::Transferrable => "mint_transferable_ticket",
            Self::Soulbound => "mint_soulbound_ticket",
        }
    }

    pub fn is_transferable(&self) -> bool {
        matches!(self, Self::Transferrable)
    }
}

impl FromStr for TicketKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "transferrable" | "transferable" => Ok(Self::Transferrable),
            "soulbound" => Ok(Self::Soulbound),
            _ => Err(RecordError::UnknownTicketKind(s.to_owned())),
        }
    }
}

impl fmt::Display for TicketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
