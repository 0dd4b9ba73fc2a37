//! Repository implementations for the fleet tables
//!
//! Each repository wraps the pool and speaks in row types: plain integers
//! and strings exactly as SQLite stores them. Conversion to domain types
//! happens in the adapter.
//!
//! Queries are built at runtime with `sqlx::query_as` and `FromRow` rows;
//! the schema lives in `migrations/`.

pub mod client;
pub mod plate;
pub mod refill;

pub use client::ClientRepository;
pub use plate::PlateRepository;
pub use refill::RefillRepository;
