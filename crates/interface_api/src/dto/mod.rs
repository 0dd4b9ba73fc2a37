//! Request and response bodies
//!
//! Wire names follow the admin front end (`nombre`, `clienteNombre`,
//! `numMatriculas`, ...), so every DTO renames its fields explicitly.

pub mod common;
pub mod client;
pub mod plate;
pub mod refill;

pub use common::{IdRequest, SuccessResponse};
