//! Domain Adapters
//!
//! Adapter implementations connecting domain ports to the SQLite layer.
//! The adapter implements the port trait, converts between row types and
//! domain types, and delegates SQL to the repositories.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use infra_db::adapters::SqliteFleetAdapter;
//! use domain_fleet::{FleetPort, FleetService};
//!
//! let port: Arc<dyn FleetPort> = Arc::new(SqliteFleetAdapter::new(pool));
//! let service = FleetService::new(port);
//! ```

pub mod fleet;

pub use fleet::SqliteFleetAdapter;
