//! Kernel errors raised while reading form input

use thiserror::Error;

use crate::money::MoneyError;
use crate::quantity::QuantityError;
use crate::temporal::TemporalError;

/// A form value that could not become a kernel value
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Temporal(#[from] TemporalError),

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}
