//! Core error types for the Stockfolio ledger.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage
//! layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::LedgerError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised when caller input is rejected at the service boundary,
/// before anything reaches the store.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Symbol cannot be empty")]
    EmptySymbol,

    #[error("Unsupported operation '{0}'. Expected BUY or SELL")]
    UnsupportedOperation(String),

    #[error("Price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD HH:MM:SS or YYYY-MM-DD")]
    InvalidDate(String),
}
