//! Raw result rows for the portfolio aggregation queries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;

use stockfolio_core::constants::TIMESTAMP_FORMAT;
use stockfolio_core::ledger::LedgerError;
use stockfolio_core::portfolio::{PortfolioSummary, Position};

use crate::ledger::model::parse_decimal_string_tolerant;

/// Raw row produced by the per-symbol position query. Decimal columns come
/// back as TEXT so SQLite's numeric formatting never reaches callers.
#[derive(QueryableByName, Debug)]
pub struct PositionRow {
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub symbol: String,
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub net_quantity: i64,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub net_cost: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub average_cost: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub last_transaction_date: String,
}

/// Raw row produced by the ledger-wide summary query. The sums are NULL on
/// an empty ledger.
#[derive(QueryableByName, Debug)]
pub struct SummaryRow {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub symbol_count: i64,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub net_invested: Option<String>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::BigInt>)]
    pub net_shares: Option<i64>,
}

// Conversion implementations

impl TryFrom<PositionRow> for Position {
    type Error = LedgerError;

    fn try_from(row: PositionRow) -> std::result::Result<Self, Self::Error> {
        let last_transaction_date =
            NaiveDateTime::parse_from_str(&row.last_transaction_date, TIMESTAMP_FORMAT).map_err(
                |e| {
                    LedgerError::InvalidData(format!(
                        "position {} has date '{}': {}",
                        row.symbol, row.last_transaction_date, e
                    ))
                },
            )?;

        Ok(Self {
            symbol: row.symbol,
            quantity: row.net_quantity,
            cost: parse_decimal_string_tolerant(&row.net_cost, "net_cost"),
            average_cost: parse_decimal_string_tolerant(&row.average_cost, "average_cost"),
            last_transaction_date,
        })
    }
}

impl From<SummaryRow> for PortfolioSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            symbol_count: row.symbol_count,
            net_invested: row
                .net_invested
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "net_invested"))
                .unwrap_or(Decimal::ZERO),
            net_shares: row.net_shares.unwrap_or(0),
        }
    }
}
