use diesel::prelude::*;
use std::sync::Arc;

use stockfolio_core::portfolio::{PortfolioRepositoryTrait, PortfolioSummary, Position};
use stockfolio_core::{Error, Result};

use super::model::{PositionRow, SummaryRow};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;

/// Repository computing the derived portfolio views.
///
/// Both views are recomputed over the complete transaction log on every
/// call. No state is held between calls, so a view can never drift from the
/// ledger; the cost is a read that grows with total transaction count.
pub struct PortfolioRepository {
    pool: Arc<DbPool>,
}

impl PortfolioRepository {
    /// Creates a new PortfolioRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl PortfolioRepositoryTrait for PortfolioRepository {
    fn get_positions(&self) -> Result<Vec<Position>> {
        let mut conn = get_connection(&self.pool)?;

        // Closed and over-sold symbols are filtered out before the
        // average-cost division, so the division is always defined.
        let rows = diesel::sql_query(
            r#"
            WITH position_totals AS (
                SELECT
                    symbol,
                    SUM(CASE WHEN operation = 'BUY' THEN quantity ELSE -quantity END) AS net_quantity,
                    SUM(CASE WHEN operation = 'BUY'
                        THEN CAST(price AS REAL) * quantity
                        ELSE -(CAST(price AS REAL) * quantity) END) AS net_cost,
                    MAX(date) AS last_transaction_date
                FROM transactions
                GROUP BY symbol
                HAVING net_quantity > 0
            )
            SELECT
                symbol,
                net_quantity,
                CAST(net_cost AS TEXT) AS net_cost,
                CAST(net_cost / net_quantity AS TEXT) AS average_cost,
                last_transaction_date
            FROM position_totals
            ORDER BY last_transaction_date DESC
            "#,
        )
        .load::<PositionRow>(&mut conn)
        .map_err(StorageError::from)?;

        rows.into_iter()
            .map(|row| Position::try_from(row).map_err(Error::from))
            .collect()
    }

    fn get_summary(&self) -> Result<PortfolioSummary> {
        let mut conn = get_connection(&self.pool)?;

        let row = diesel::sql_query(
            r#"
            SELECT
                COUNT(DISTINCT symbol) AS symbol_count,
                CAST(SUM(CASE WHEN operation = 'BUY'
                    THEN CAST(price AS REAL) * quantity
                    ELSE -(CAST(price AS REAL) * quantity) END) AS TEXT) AS net_invested,
                SUM(CASE WHEN operation = 'BUY' THEN quantity ELSE -quantity END) AS net_shares
            FROM transactions
            "#,
        )
        .get_result::<SummaryRow>(&mut conn)
        .map_err(StorageError::from)?;

        Ok(PortfolioSummary::from(row))
    }
}
