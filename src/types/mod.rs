mod errors;
mod money;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

pub use errors::MoneyError;
pub use money::{from_cents, MoneyRange};

pub type BankId = String;
pub type AccountId = String;
pub type TransactionId = String;

/// Provenance tag carried by every record and dataset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataSource {
    RealApi,
    Synthetic
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::RealApi => "REAL_API",
            DataSource::Synthetic => "SYNTHETIC"
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "GBP")]
    Gbp,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Gbp, Currency::Eur, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Usd => "USD"
        }
    }
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}
