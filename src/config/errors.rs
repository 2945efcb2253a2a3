use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::MoneyError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Transactions per account must not be negative, got [{count}]")]
    InvalidTransactionCount {
        count: i64
    },
    #[error("Lookback window must be between 0 and {max} days, got [{days}]")]
    InvalidLookback {
        days: i64,
        max: i64
    },
    #[error("Opening balance range [{min}, {max}) is invalid: {source}")]
    InvalidBalanceRange {
        min: Decimal,
        max: Decimal,
        source: MoneyError
    },
    #[error("Missing required credentials: {}", .names.join(", "))]
    MissingCredentials {
        names: Vec<&'static str>
    }
}
