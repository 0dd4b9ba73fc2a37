//! Date handling for refills
//!
//! Refill dates arrive as free text from an HTML form. Three shapes are
//! accepted and all resolve to a UTC instant:
//! - RFC 3339 (`2024-05-01T08:30:00+02:00`)
//! - HTML `datetime-local` (`2024-05-01T08:30` or `2024-05-01T08:30:15`), read as UTC
//! - a bare date (`2024-05-01`), read as UTC midnight

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors related to date parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),
}

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a refill date submitted from a form
pub fn parse_refill_date(input: &str) -> Result<DateTime<Utc>, TemporalError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TemporalError::InvalidDate(input.to_string()))
}
