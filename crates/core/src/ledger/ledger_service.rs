use chrono::Local;
use log::debug;
use std::sync::Arc;

use crate::constants::TIMESTAMP_FORMAT;
use crate::ledger::ledger_model::{parse_timestamp, NewTransaction, Transaction};
use crate::ledger::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::Result;

/// Service for recording and querying ledger transactions.
///
/// Owns the write-path policy the store itself stays agnostic of: input
/// validation, symbol normalization, and timestamp defaulting.
pub struct LedgerService {
    ledger_repository: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    /// Creates a new LedgerService instance with the injected repository
    pub fn new(ledger_repository: Arc<dyn LedgerRepositoryTrait>) -> Self {
        Self { ledger_repository }
    }
}

impl LedgerServiceTrait for LedgerService {
    fn record(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;

        let mut normalized = new_transaction;
        normalized.symbol = normalized.symbol.trim().to_uppercase();

        // Canonicalize the timestamp so the store only ever holds the full
        // wire format, whether the caller supplied a date or not.
        let date = match normalized.date.as_deref() {
            Some(supplied) => parse_timestamp(supplied)?,
            None => Local::now().naive_local(),
        };
        normalized.date = Some(date.format(TIMESTAMP_FORMAT).to_string());

        debug!(
            "Recording {} {} x {} @ {}",
            normalized.operation, normalized.symbol, normalized.quantity, normalized.price
        );
        self.ledger_repository.insert_transaction(normalized)
    }

    fn get_transaction(&self, transaction_id: i64) -> Result<Transaction> {
        self.ledger_repository.get_transaction(transaction_id)
    }

    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        self.ledger_repository.get_transactions(symbol)
    }
}
