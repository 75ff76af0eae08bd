//! Portfolio module - derived views over the transaction ledger.

mod portfolio_model;
mod portfolio_service;
mod portfolio_traits;


pub use portfolio_model::{PortfolioSummary, Position};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
