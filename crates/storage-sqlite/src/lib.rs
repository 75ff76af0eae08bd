//! SQLite storage implementation for Stockfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `stockfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The append-only transaction log repository
//! - The derived portfolio view queries
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!     storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod ledger;
pub mod portfolio;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export repositories
pub use ledger::LedgerRepository;
pub use portfolio::PortfolioRepository;

// Re-export from stockfolio-core for convenience
pub use stockfolio_core::errors::{DatabaseError, Error, Result};
