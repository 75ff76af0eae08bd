//! Ledger domain models.

use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMAT};
use crate::errors::ValidationError;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a ledger transaction. Persisted as `"BUY"` / `"SELL"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Buy,
    Sell,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Buy => "BUY",
            Operation::Sell => "SELL",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Operation::Buy),
            "SELL" => Ok(Operation::Sell),
            other => Err(ValidationError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Domain model for a recorded ledger transaction.
///
/// Transactions are immutable once written. The log is append-only:
/// correcting a mistake means appending a compensating transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Surrogate key, strictly increasing in insertion order, assigned by
    /// the store.
    pub id: i64,
    pub symbol: String,
    pub operation: Operation,
    pub price: Decimal,
    pub quantity: i64,
    #[serde(with = "timestamp_format")]
    pub date: NaiveDateTime,
}

/// Input model for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub symbol: String,
    /// `"BUY"` or `"SELL"`; anything else is rejected by [`validate`].
    ///
    /// [`validate`]: NewTransaction::validate
    pub operation: String,
    pub price: Decimal,
    pub quantity: i64,
    /// `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD`. The store assigns the current
    /// time when omitted. Caller-supplied dates are not validated for
    /// ordering against existing rows.
    pub date: Option<String>,
}

impl NewTransaction {
    /// Validates the transaction data before it reaches the store.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Operation::from_str(&self.operation)?;
        if self.price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(self.price));
        }
        if self.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity(self.quantity));
        }
        if let Some(date) = &self.date {
            parse_timestamp(date)?;
        }
        Ok(())
    }
}

/// Parses a caller-supplied timestamp, accepting the full wire format or a
/// bare date (interpreted as midnight).
pub fn parse_timestamp(s: &str) -> std::result::Result<NaiveDateTime, ValidationError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    Err(ValidationError::InvalidDate(s.to_string()))
}

pub(crate) mod timestamp_format {
    use crate::constants::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}
