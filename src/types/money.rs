use crate::types::errors::MoneyError;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::ops::Range;

pub const DECIMAL_PLACES: u32 = 2;

/// Builds a 2-decimal amount from a whole number of cents.
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// Converts an amount with at most two decimal places into whole cents.
pub fn to_cents(value: Decimal) -> Result<i64, MoneyError> {
    let scaled = value.checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow(value))?;

    if !scaled.fract().is_zero() {
        return Err(MoneyError::InvalidPrecision(value));
    }

    scaled.to_i64().ok_or(MoneyError::Overflow(value))
}

/// Half-open range of money values, sampled uniformly at cent granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyRange {
    cents: Range<i64>
}

impl MoneyRange {
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, MoneyError> {
        let cents = to_cents(min)?..to_cents(max)?;

        if cents.is_empty() {
            return Err(MoneyError::EmptyRange { min, max });
        }

        Ok(Self { cents })
    }

    pub fn min(&self) -> Decimal {
        from_cents(self.cents.start)
    }

    pub fn max(&self) -> Decimal {
        from_cents(self.cents.end)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Decimal {
        from_cents(rng.gen_range(self.cents.clone()))
    }
}
