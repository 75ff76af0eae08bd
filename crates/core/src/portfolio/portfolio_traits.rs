use super::portfolio_model::{PortfolioSummary, Position};
use crate::Result;

/// Trait defining the contract for the derived portfolio views computed by
/// the storage layer.
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Per-symbol holdings with a positive net quantity, most recently
    /// transacted first.
    fn get_positions(&self) -> Result<Vec<Position>>;

    /// Unfiltered ledger-wide totals. An empty ledger yields zeros.
    fn get_summary(&self) -> Result<PortfolioSummary>;
}

/// Trait defining the contract for portfolio service operations.
pub trait PortfolioServiceTrait: Send + Sync {
    fn get_positions(&self) -> Result<Vec<Position>>;
    fn get_summary(&self) -> Result<PortfolioSummary>;
}
