use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: [{0}] has more than two decimal places")]
    InvalidPrecision(Decimal),
    #[error("Money error: [{0}] does not fit in whole cents")]
    Overflow(Decimal),
    #[error("Money error: range [{min}, {max}) is empty")]
    EmptyRange {
        min: Decimal,
        max: Decimal
    }
}
