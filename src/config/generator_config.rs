use rust_decimal::Decimal;

use crate::config::errors::ConfigError;
use crate::types::{from_cents, MoneyRange};

pub const DEFAULT_TRANSACTIONS_PER_ACCOUNT: i64 = 100;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 90;
pub const MAX_LOOKBACK_DAYS: i64 = 36_500;

/// Caller-facing generation parameters, as they arrive from the command line.
///
/// Nothing is validated until [`GeneratorConfig::validate`] turns this into a
/// [`GenerationPlan`]; invalid values are rejected, never clamped.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub transactions_per_account: i64,
    pub lookback_days: i64,
    pub opening_balance_min: Decimal,
    pub opening_balance_max: Decimal,
    pub seed: Option<u64>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            transactions_per_account: DEFAULT_TRANSACTIONS_PER_ACCOUNT,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            opening_balance_min: from_cents(100_000),
            opening_balance_max: from_cents(5_000_000),
            seed: None
        }
    }
}

impl GeneratorConfig {
    pub fn with_transactions_per_account(mut self, count: i64) -> Self {
        self.transactions_per_account = count;
        self
    }

    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn with_opening_balance(mut self, min: Decimal, max: Decimal) -> Self {
        self.opening_balance_min = min;
        self.opening_balance_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter and produces the plan the synthesizer runs from.
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `transactions_per_account` is negative.
    /// - `lookback_days` is negative or longer than [`MAX_LOOKBACK_DAYS`].
    /// - The opening balance range is empty, inverted, or finer than a cent.
    pub fn validate(&self) -> Result<GenerationPlan, ConfigError> {
        let transactions_per_account = usize::try_from(self.transactions_per_account)
            .map_err(|_| ConfigError::InvalidTransactionCount { count: self.transactions_per_account })?;

        if !(0..=MAX_LOOKBACK_DAYS).contains(&self.lookback_days) {
            return Err(ConfigError::InvalidLookback { days: self.lookback_days, max: MAX_LOOKBACK_DAYS });
        }

        let opening_balance = MoneyRange::new(self.opening_balance_min, self.opening_balance_max)
            .map_err(|source| ConfigError::InvalidBalanceRange {
                min: self.opening_balance_min,
                max: self.opening_balance_max,
                source
            })?;

        Ok(GenerationPlan {
            transactions_per_account,
            lookback_days: self.lookback_days,
            opening_balance,
            seed: self.seed
        })
    }
}

/// Validated generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub transactions_per_account: usize,
    pub lookback_days: i64,
    pub opening_balance: MoneyRange,
    pub seed: Option<u64>
}
