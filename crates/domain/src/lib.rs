//! Core domain types for NFT ticketing.
//!
//! This crate provides:
//! - Fixed-point balance formatting for on-chain token amounts
//! - Validated raw token amounts
//! - Typed event, ticket and claim records
//! - Domain errors

/// Prelude module for convenient imports.
pub mod prelude;

/// Ticketing entities.
pub mod entities;
/// Enumerations shared across entities.
pub mod enums;
/// Domain errors.
pub mod error;
/// Balance and currency formatting.
pub mod formatting;
/// Serde helpers for on-chain record shapes.
pub mod serde_utils;
/// Value objects.
pub mod value_objects;
