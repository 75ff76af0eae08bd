use log::debug;
use std::sync::Arc;

use crate::portfolio::portfolio_model::{PortfolioSummary, Position};
use crate::portfolio::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::Result;

/// Service exposing the derived portfolio views.
///
/// Holds no state of its own: each call is an independent, full
/// recomputation from the transaction log, so a view can never drift from
/// the underlying ledger.
pub struct PortfolioService {
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    /// Creates a new PortfolioService instance with the injected repository
    pub fn new(portfolio_repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self {
            portfolio_repository,
        }
    }
}

impl PortfolioServiceTrait for PortfolioService {
    fn get_positions(&self) -> Result<Vec<Position>> {
        let positions = self.portfolio_repository.get_positions()?;
        debug!("Computed {} open positions", positions.len());
        Ok(positions)
    }

    fn get_summary(&self) -> Result<PortfolioSummary> {
        self.portfolio_repository.get_summary()
    }
}
