//! Fleet Management Domain
//!
//! This crate models the three records the fleet admin tracks and the
//! operations performed on them:
//!
//! - **Client**: a billable account owning plates and refills
//! - **Plate**: a vehicle registration, unique and stored upper-case
//! - **Refill**: a fueling transaction tied to one client and one plate
//!
//! Data access goes through the [`FleetPort`] trait. [`FleetService`] holds
//! an `Arc<dyn FleetPort>` so the SQLite adapter in `infra_db` and the
//! in-memory [`MockFleetPort`] are interchangeable.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_fleet::{FleetService, MockFleetPort, UpsertClient};
//!
//! let service = FleetService::new(Arc::new(MockFleetPort::new()));
//! service.upsert_client(UpsertClient::create("Logística David", None)).await?;
//! ```

pub mod client;
pub mod plate;
pub mod refill;
pub mod stats;
pub mod error;
pub mod resolve;
pub mod ports;
pub mod services;

pub use client::{Client, ClientDraft};
pub use plate::{Plate, PlateDraft, PlateNumber};
pub use refill::{NewRefill, Refill};
pub use stats::{ClientStats, PlateSpend, RefillTotals, EFFICIENCY_LIMIT};
pub use error::FleetError;
pub use resolve::{ClientRef, NameMatch, PlateRef};
pub use ports::FleetPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockFleetPort;
pub use services::{
    CreateRefill, FleetService, UpsertClient, UpsertOutcome, UpsertPlate,
};
