use super::ledger_model::{NewTransaction, Transaction};
use crate::Result;

/// Trait defining the contract for ledger persistence operations.
///
/// The transaction log is append-only: implementations expose no update or
/// delete path.
pub trait LedgerRepositoryTrait: Send + Sync {
    /// Appends one transaction and returns it with the store-assigned id.
    /// The row is persisted exactly as handed in; validation and
    /// normalization happen upstream in the service layer.
    fn insert_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    fn get_transaction(&self, transaction_id: i64) -> Result<Transaction>;

    /// Returns transactions newest first (`date DESC, id DESC`), optionally
    /// filtered to one symbol. The filter is case-insensitive, matched
    /// against the normalized uppercase form.
    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for ledger service operations.
pub trait LedgerServiceTrait: Send + Sync {
    fn record(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    fn get_transaction(&self, transaction_id: i64) -> Result<Transaction>;
    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>>;
}
