//! Fleet domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the fleet domain
#[derive(Debug, Error)]
pub enum FleetError {
    /// A client name did not resolve to an existing client
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// A plate number did not resolve to an existing plate
    #[error("Plate not found: {0}")]
    PlateNotFound(String),

    /// Invalid input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The datastore rejected the write (e.g. a duplicate plate number)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other datastore failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FleetError {
    pub fn validation(message: impl Into<String>) -> Self {
        FleetError::Validation(message.into())
    }

    /// Converts a port error, substituting `default_message` when the
    /// underlying error carries no message of its own
    pub fn from_port_or(err: PortError, default_message: &str) -> Self {
        let fallback = |message: String| {
            if message.trim().is_empty() {
                default_message.to_string()
            } else {
                message
            }
        };
        match err {
            PortError::Validation { message, .. } => FleetError::Validation(fallback(message)),
            PortError::Conflict { message } => FleetError::Conflict(fallback(message)),
            other => FleetError::Storage(fallback(other.message())),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::ClientNotFound(_) | FleetError::PlateNotFound(_))
    }
}

impl From<PortError> for FleetError {
    fn from(err: PortError) -> Self {
        FleetError::from_port_or(err, "unexpected storage error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_port_message_uses_default() {
        let err = FleetError::from_port_or(PortError::internal(""), "failed to save refill");
        assert!(matches!(err, FleetError::Storage(ref m) if m == "failed to save refill"));
    }

    #[test]
    fn test_port_message_is_kept() {
        let err = FleetError::from_port_or(PortError::internal("disk I/O error"), "failed");
        assert_eq!(err.to_string(), "Storage error: disk I/O error");
    }

    #[test]
    fn test_conflict_maps_to_conflict() {
        let err: FleetError = PortError::conflict("duplicate plate").into();
        assert!(matches!(err, FleetError::Conflict(_)));
    }
}
