use diesel::prelude::*;
use std::sync::Arc;

use stockfolio_core::ledger::{LedgerError, LedgerRepositoryTrait, NewTransaction, Transaction};
use stockfolio_core::{Error, Result};

use super::model::{NewTransactionRow, TransactionRow};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::transactions;

/// Repository for the append-only transaction log.
///
/// This is the sole write path into the store. No update or delete is
/// implemented anywhere in this crate; a mistaken entry is corrected by
/// appending a compensating transaction.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn insert_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let row: NewTransactionRow = new_transaction.into();

        let inserted = diesel::insert_into(transactions::table)
            .values(&row)
            .get_result::<TransactionRow>(&mut conn)
            .map_err(StorageError::from)?;

        Transaction::try_from(inserted).map_err(Error::from)
    }

    fn get_transaction(&self, transaction_id: i64) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;

        let row = transactions::table
            .select(TransactionRow::as_select())
            .find(transaction_id)
            .first::<TransactionRow>(&mut conn)
            .map_err(|e| Error::from(LedgerError::NotFound(e.to_string())))?;

        Transaction::try_from(row).map_err(Error::from)
    }

    fn get_transactions(&self, symbol: Option<&str>) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = transactions::table
            .select(TransactionRow::as_select())
            .order((transactions::date.desc(), transactions::id.desc()))
            .into_boxed();

        if let Some(symbol) = symbol {
            query = query.filter(transactions::symbol.eq(symbol.trim().to_uppercase()));
        }

        let rows = query
            .load::<TransactionRow>(&mut conn)
            .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Transaction::try_from(row).map_err(Error::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, DbPool};
    use chrono::{Local, Timelike};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use stockfolio_core::ledger::{LedgerService, LedgerServiceTrait, Operation};
    use tempfile::tempdir;

    /// Creates a test repository backed by a temp database.
    /// Returns the pool for re-running migrations and the temp dir to keep
    /// the database alive.
    fn create_test_repository() -> (LedgerRepository, Arc<DbPool>, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let pool = create_pool(&db_path.to_string_lossy()).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        (LedgerRepository::new(Arc::clone(&pool)), pool, temp_dir)
    }

    fn new_transaction(
        symbol: &str,
        operation: &str,
        price: Decimal,
        quantity: i64,
        date: &str,
    ) -> NewTransaction {
        NewTransaction {
            symbol: symbol.to_string(),
            operation: operation.to_string(),
            price,
            quantity,
            date: Some(date.to_string()),
        }
    }

    #[test]
    fn test_insert_assigns_strictly_increasing_ids() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        let first = repository
            .insert_transaction(new_transaction(
                "THYAO",
                "BUY",
                dec!(10),
                100,
                "2024-03-15 10:00:00",
            ))
            .unwrap();
        let second = repository
            .insert_transaction(new_transaction(
                "GARAN",
                "BUY",
                dec!(20),
                50,
                "2024-03-15 11:00:00",
            ))
            .unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn test_fields_survive_round_trip() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        let inserted = repository
            .insert_transaction(new_transaction(
                "THYAO",
                "SELL",
                dec!(35.42),
                250,
                "2024-03-15 10:30:00",
            ))
            .unwrap();
        let fetched = repository.get_transaction(inserted.id).unwrap();

        assert_eq!(fetched, inserted);
        assert_eq!(fetched.symbol, "THYAO");
        assert_eq!(fetched.operation, Operation::Sell);
        assert_eq!(fetched.price, dec!(35.42));
        assert_eq!(fetched.quantity, 250);
        assert_eq!(
            fetched.date.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-03-15 10:30:00"
        );
    }

    #[test]
    fn test_transactions_are_returned_newest_first() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        for (symbol, date) in [
            ("AAA", "2024-03-10 09:00:00"),
            ("CCC", "2024-03-20 09:00:00"),
            ("BBB", "2024-03-15 09:00:00"),
        ] {
            repository
                .insert_transaction(new_transaction(symbol, "BUY", dec!(10), 10, date))
                .unwrap();
        }

        let symbols: Vec<String> = repository
            .get_transactions(None)
            .unwrap()
            .into_iter()
            .map(|t| t.symbol)
            .collect();
        assert_eq!(symbols, vec!["CCC", "BBB", "AAA"]);
    }

    #[test]
    fn test_equal_dates_break_ties_by_insertion_order() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        let date = "2024-03-15 09:00:00";
        let first = repository
            .insert_transaction(new_transaction("THYAO", "BUY", dec!(10), 10, date))
            .unwrap();
        let second = repository
            .insert_transaction(new_transaction("THYAO", "SELL", dec!(11), 5, date))
            .unwrap();

        let transactions = repository.get_transactions(None).unwrap();
        assert_eq!(transactions[0].id, second.id);
        assert_eq!(transactions[1].id, first.id);
    }

    #[test]
    fn test_symbol_filter_is_case_insensitive() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        repository
            .insert_transaction(new_transaction(
                "THYAO",
                "BUY",
                dec!(10),
                100,
                "2024-03-15 10:00:00",
            ))
            .unwrap();
        repository
            .insert_transaction(new_transaction(
                "GARAN",
                "BUY",
                dec!(20),
                50,
                "2024-03-15 11:00:00",
            ))
            .unwrap();

        let filtered = repository.get_transactions(Some("thyao")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].symbol, "THYAO");
    }

    #[test]
    fn test_get_transaction_not_found() {
        let (repository, _pool, _temp_dir) = create_test_repository();

        assert!(matches!(
            repository.get_transaction(42),
            Err(Error::Ledger(LedgerError::NotFound(_)))
        ));
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let (repository, pool, _temp_dir) = create_test_repository();

        repository
            .insert_transaction(new_transaction(
                "THYAO",
                "BUY",
                dec!(10),
                100,
                "2024-03-15 10:00:00",
            ))
            .unwrap();

        run_migrations(&pool).expect("repeated migration run should be a no-op");
        run_migrations(&pool).expect("repeated migration run should be a no-op");

        assert_eq!(repository.get_transactions(None).unwrap().len(), 1);
    }

    #[test]
    fn test_record_through_service_defaults_timestamp_and_normalizes_symbol() {
        let (repository, _pool, _temp_dir) = create_test_repository();
        let service = LedgerService::new(Arc::new(repository));

        // The wire format truncates to whole seconds, so compare against a
        // truncated lower bound.
        let before = Local::now().naive_local().with_nanosecond(0).unwrap();
        let recorded = service
            .record(NewTransaction {
                symbol: "thyao".to_string(),
                operation: "BUY".to_string(),
                price: dec!(10.50),
                quantity: 100,
                date: None,
            })
            .unwrap();
        let after = Local::now().naive_local();

        assert_eq!(recorded.symbol, "THYAO");
        assert!(recorded.date >= before, "date predates the record call");
        assert!(recorded.date <= after, "date postdates the record call");

        let fetched = service.get_transaction(recorded.id).unwrap();
        assert_eq!(fetched, recorded);
    }
}
