//! Plate entity and number normalization
//!
//! A plate number is stored trimmed and upper-cased so that `" 1234-bbb "`
//! and `"1234-BBB"` refer to the same vehicle. The normalized form is the
//! only one that ever reaches the datastore.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClientId, PlateId};
use crate::error::FleetError;

/// A normalized vehicle registration number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlateNumber(String);

impl PlateNumber {
    /// Normalizes raw input: trims surrounding whitespace and upper-cases
    ///
    /// # Errors
    ///
    /// Returns `FleetError::Validation` if nothing is left after trimming
    pub fn parse(raw: &str) -> Result<Self, FleetError> {
        let normalized = normalize_plate_number(raw);
        if normalized.is_empty() {
            return Err(FleetError::validation("plate number must not be empty"));
        }
        Ok(Self(normalized))
    }

    /// Wraps a value read back from storage, which is already normalized
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlateNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trim + upper-case, the storage form of a plate number
pub fn normalize_plate_number(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// A vehicle owned by one client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plate {
    pub id: PlateId,
    pub number: PlateNumber,
    pub client_id: ClientId,
}

/// The editable fields of a plate, with the owner already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateDraft {
    pub number: PlateNumber,
    pub client_id: ClientId,
}

impl Plate {
    pub fn from_draft(id: PlateId, draft: &PlateDraft) -> Self {
        Self {
            id,
            number: draft.number.clone(),
            client_id: draft.client_id,
        }
    }
}
