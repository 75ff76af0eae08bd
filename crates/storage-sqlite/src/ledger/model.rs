//! Database models for ledger transactions.

use chrono::{Local, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use stockfolio_core::constants::TIMESTAMP_FORMAT;
use stockfolio_core::ledger::{LedgerError, NewTransaction, Operation, Transaction};

/// Helper function to parse a string into a Decimal,
/// with support for scientific notation.
pub(crate) fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Database model for a transaction row.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionRow {
    pub id: i64,
    pub symbol: String,
    pub operation: String,
    pub price: String,
    pub quantity: i64,
    pub date: String,
}

/// Insert model for a transaction row; the store assigns `id`.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
pub struct NewTransactionRow {
    pub symbol: String,
    pub operation: String,
    pub price: String,
    pub quantity: i64,
    pub date: String,
}

// Conversion implementations

impl TryFrom<TransactionRow> for Transaction {
    type Error = LedgerError;

    fn try_from(row: TransactionRow) -> std::result::Result<Self, Self::Error> {
        let operation = Operation::from_str(&row.operation).map_err(|_| {
            LedgerError::InvalidData(format!(
                "transaction {} has operation '{}'",
                row.id, row.operation
            ))
        })?;
        let date = NaiveDateTime::parse_from_str(&row.date, TIMESTAMP_FORMAT).map_err(|e| {
            LedgerError::InvalidData(format!(
                "transaction {} has date '{}': {}",
                row.id, row.date, e
            ))
        })?;

        Ok(Self {
            id: row.id,
            symbol: row.symbol,
            operation,
            price: parse_decimal_string_tolerant(&row.price, "price"),
            quantity: row.quantity,
            date,
        })
    }
}

impl From<NewTransaction> for NewTransactionRow {
    fn from(domain: NewTransaction) -> Self {
        // The service layer resolves the date before handing the
        // transaction over; fall back to the current time all the same so a
        // bare repository caller still produces a well-formed row.
        let date = domain.date.unwrap_or_else(|| {
            Local::now()
                .naive_local()
                .format(TIMESTAMP_FORMAT)
                .to_string()
        });

        Self {
            symbol: domain.symbol,
            operation: domain.operation,
            price: domain.price.to_string(),
            quantity: domain.quantity,
            date,
        }
    }
}
