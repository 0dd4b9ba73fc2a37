//! Infrastructure Database Layer
//!
//! SQLite persistence for the fleet admin service, built on SQLx.
//!
//! # Architecture
//!
//! - [`pool`]: pool creation and the embedded migrations
//! - [`repositories`]: one repository per table, speaking in row types
//! - [`adapters`]: `SqliteFleetAdapter`, the production `FleetPort`
//! - [`seed`]: optional demo data for local runs
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, migrate, DatabaseConfig, SqliteFleetAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://fleet.db")).await?;
//! migrate(&pool).await?;
//! let adapter = SqliteFleetAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;
pub mod seed;

pub use pool::{
    create_in_memory_pool, create_pool, migrate, DatabaseConfig,
    DatabasePool, IN_MEMORY_URL,
};
pub use error::DatabaseError;
pub use adapters::SqliteFleetAdapter;
pub use seed::seed_demo_data;
