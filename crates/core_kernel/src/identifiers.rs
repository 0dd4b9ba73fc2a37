//! Strongly-typed identifiers for domain entities
//!
//! Rows are keyed by SQLite integer primary keys. Wrapping them in newtypes
//! keeps a plate id from being passed where a client id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an identifier string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {kind} identifier: '{value}'")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw row id
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let raw = trimmed.strip_prefix(concat!($prefix, "-")).unwrap_or(trimmed);
                raw.parse::<i64>().map(Self).map_err(|_| ParseIdError {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(ClientId, "CLI");
define_id!(PlateId, "MAT");
define_id!(RefillId, "REP");
