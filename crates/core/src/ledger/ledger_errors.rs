use thiserror::Error;

/// Domain-level ledger faults.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transaction not found: {0}")]
    NotFound(String),

    /// A stored row could not be converted back into a domain transaction.
    /// The ledger never repairs or skips such rows; the fault propagates
    /// to the caller as-is.
    #[error("Invalid ledger data: {0}")]
    InvalidData(String),
}
