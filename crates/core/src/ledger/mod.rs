//! Ledger module - domain models, services, and traits for the
//! append-only transaction log.

mod ledger_errors;
mod ledger_model;
mod ledger_service;
mod ledger_traits;



pub use ledger_errors::LedgerError;
pub use ledger_model::{parse_timestamp, NewTransaction, Operation, Transaction};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

pub(crate) use ledger_model::timestamp_format;
