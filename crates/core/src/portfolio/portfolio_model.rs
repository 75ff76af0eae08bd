//! Derived portfolio views.
//!
//! Nothing in this module is ever persisted; every value is recomputed from
//! the full transaction log at call time.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Current holding in one symbol.
///
/// A position exists in the view only while its net quantity is positive;
/// closed and over-sold symbols are excluded before the average-cost
/// division, so that division is always defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    /// Net shares held: buys minus sells.
    pub quantity: i64,
    /// Net capital in the position: buy notional minus sell notional.
    pub cost: Decimal,
    /// `cost / quantity`.
    pub average_cost: Decimal,
    /// Most recent transaction date for the symbol, the anchor used to
    /// order the positions view.
    #[serde(with = "crate::ledger::timestamp_format")]
    pub last_transaction_date: NaiveDateTime,
}

/// Ledger-wide totals over the unfiltered transaction log.
///
/// Closed and over-sold positions still contribute here, unlike the
/// positions view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Count of distinct symbols ever transacted.
    pub symbol_count: i64,
    /// Signed notional: buys add, sells subtract.
    pub net_invested: Decimal,
    /// Signed share count: buys add, sells subtract.
    pub net_shares: i64,
}
