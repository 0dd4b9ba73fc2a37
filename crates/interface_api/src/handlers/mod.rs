//! Request handlers
//!
//! Each handler extracts its body, converts it to a service request and
//! maps the outcome to `SuccessResponse` or a listing.

pub mod clients;
pub mod plates;
pub mod refills;
pub mod health;
