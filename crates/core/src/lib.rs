//! Stockfolio Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Stockfolio
//! transaction ledger. It is database-agnostic and defines traits that
//! are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
