//! Append-only transaction log storage.

pub mod model;
pub mod repository;

pub use repository::LedgerRepository;
