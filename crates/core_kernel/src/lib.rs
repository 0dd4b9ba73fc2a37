//! Core Kernel - Foundational types for the fleet admin service
//!
//! This crate provides the building blocks shared by every other crate:
//! - Typed integer identifiers for clients, plates and refills
//! - `Money` and `Litres` with exact decimal arithmetic
//! - Parsing of the date formats accepted from refill forms
//! - The `PortError` type and marker traits for data-access ports

pub mod money;
pub mod quantity;
pub mod temporal;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, MoneyError};
pub use quantity::{Litres, QuantityError};
pub use temporal::{parse_refill_date, TemporalError};
pub use identifiers::{ClientId, PlateId, RefillId, ParseIdError};
pub use error::CoreError;
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
