//! Money type with precise decimal arithmetic
//!
//! Refill amounts are euro values entered by hand on a form. They are kept
//! as `rust_decimal` values rounded to cents and persisted as integer minor
//! units, so sums computed by the database stay exact.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places kept for monetary amounts
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Errors that can occur while building money values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Negative amount not allowed: {0}")]
    Negative(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount in euros, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounding half away from zero to cents
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(
                MONEY_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            ),
        }
    }

    /// Creates Money from an integer amount of cents
    pub fn from_minor(minor_units: i64) -> Self {
        Self {
            amount: Decimal::new(minor_units, MONEY_DECIMAL_PLACES),
        }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: Decimal::ZERO }
    }

    /// Parses a form value such as `"50.25"` or `"50,25"`
    ///
    /// Negative values are rejected.
    pub fn parse(input: &str) -> Result<Self, MoneyError> {
        let normalized = input.trim().replace(',', ".");
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| MoneyError::InvalidAmount(input.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(input.to_string()));
        }
        Ok(Self::new(amount))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount in cents
    pub fn to_minor(&self) -> Result<i64, MoneyError> {
        self.amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.trunc().to_i64())
            .ok_or(MoneyError::Overflow)
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} €", self.amount)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.amount + other.amount)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn minor_units_round_trip(cents in 0i64..10_000_000_000i64) {
            let money = Money::from_minor(cents);
            prop_assert_eq!(money.to_minor().unwrap(), cents);
        }

        #[test]
        fn sum_matches_minor_unit_sum(values in prop::collection::vec(0i64..1_000_000i64, 0..50)) {
            let total: Money = values.iter().copied().map(Money::from_minor).sum();
            let expected: i64 = values.iter().sum();
            prop_assert_eq!(total.to_minor().unwrap(), expected);
        }
    }
}
