//! Fuel quantities
//!
//! Litres are kept to millilitre precision and persisted as integer
//! millilitres, the same way `Money` is persisted as cents.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places kept for fuel quantities
pub const LITRES_DECIMAL_PLACES: u32 = 3;

/// Errors that can occur while building quantities
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Negative quantity not allowed: {0}")]
    Negative(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A fuel quantity in litres
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Litres {
    value: Decimal,
}

impl Litres {
    pub fn new(value: Decimal) -> Self {
        Self {
            value: value.round_dp_with_strategy(
                LITRES_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            ),
        }
    }

    pub fn from_millilitres(ml: i64) -> Self {
        Self {
            value: Decimal::new(ml, LITRES_DECIMAL_PLACES),
        }
    }

    pub fn zero() -> Self {
        Self { value: Decimal::ZERO }
    }

    /// Parses a form value such as `"40.5"` or `"40,5"`
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        let normalized = input.trim().replace(',', ".");
        let value = Decimal::from_str(&normalized)
            .map_err(|_| QuantityError::InvalidQuantity(input.to_string()))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(QuantityError::Negative(input.to_string()));
        }
        Ok(Self::new(value))
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn to_millilitres(&self) -> Result<i64, QuantityError> {
        self.value
            .checked_mul(Decimal::ONE_THOUSAND)
            .and_then(|ml| ml.trunc().to_i64())
            .ok_or(QuantityError::Overflow)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl Default for Litres {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Litres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} L", self.value.normalize())
    }
}

impl FromStr for Litres {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Litres {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }
}

impl AddAssign for Litres {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Litres {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Litres::zero(), |acc, l| acc + l)
    }
}
