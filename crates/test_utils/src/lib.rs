//! Test Utilities Crate
//!
//! Shared test infrastructure for the fleet admin test suite.
//!
//! # Modules
//!
//! - `fixtures`: The demo clients and plates, fixed dates and amounts
//! - `builders`: Builders for service requests and action form bodies
//! - `database`: A migrated in-memory SQLite database per test
//! - `assertions`: Assertion helpers for money, litres and fleet errors
//! - `generators`: Property-based and fake data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
