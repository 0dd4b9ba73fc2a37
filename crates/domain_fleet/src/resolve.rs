//! Reference resolution for foreign keys
//!
//! Forms identify the owning client and the refuelled plate by free text
//! (a client name, a plate number) rather than by id. That lookup lives
//! here, behind [`ClientRef`] and [`PlateRef`], so a form that starts sending
//! ids only changes which variant it builds.

use tracing::debug;

use crate::client::Client;
use crate::error::FleetError;
use crate::plate::Plate;
use crate::ports::FleetPort;
use core_kernel::{ClientId, PlateId};

/// How a client name is compared against stored names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// Byte-for-byte equality
    Exact,
    /// Equality after ASCII lower-casing both sides, like SQLite's `LOWER()`
    CaseInsensitive,
}

impl NameMatch {
    /// Returns true if `stored` matches `candidate` under this mode
    pub fn matches(&self, stored: &str, candidate: &str) -> bool {
        match self {
            NameMatch::Exact => stored == candidate,
            NameMatch::CaseInsensitive => stored.eq_ignore_ascii_case(candidate),
        }
    }
}

/// How a request refers to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientRef {
    Id(ClientId),
    Name(String),
}

/// How a request refers to a plate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlateRef {
    Id(PlateId),
    Number(String),
}

impl ClientRef {
    pub fn name(name: impl Into<String>) -> Self {
        ClientRef::Name(name.into())
    }
}

impl PlateRef {
    pub fn number(number: impl Into<String>) -> Self {
        PlateRef::Number(number.into())
    }
}

/// Resolves a client reference to the stored client
///
/// # Errors
///
/// `FleetError::ClientNotFound` when nothing matches
pub async fn resolve_client(
    port: &dyn FleetPort,
    reference: &ClientRef,
    mode: NameMatch,
) -> Result<Client, FleetError> {
    let found = match reference {
        ClientRef::Id(id) => port.get_client(*id).await?,
        ClientRef::Name(name) => port.find_client_by_name(name, mode).await?,
    };

    found.ok_or_else(|| {
        debug!(?reference, "client reference did not resolve");
        match reference {
            ClientRef::Id(id) => FleetError::ClientNotFound(id.to_string()),
            ClientRef::Name(name) => FleetError::ClientNotFound(name.clone()),
        }
    })
}

/// Resolves a plate reference to the stored plate
///
/// Numbers are matched exactly as given.
pub async fn resolve_plate(
    port: &dyn FleetPort,
    reference: &PlateRef,
) -> Result<Plate, FleetError> {
    let found = match reference {
        PlateRef::Id(id) => port.get_plate(*id).await?,
        PlateRef::Number(number) => port.find_plate_by_number(number).await?,
    };

    found.ok_or_else(|| {
        debug!(?reference, "plate reference did not resolve");
        match reference {
            PlateRef::Id(id) => FleetError::PlateNotFound(id.to_string()),
            PlateRef::Number(number) => FleetError::PlateNotFound(number.clone()),
        }
    })
}
