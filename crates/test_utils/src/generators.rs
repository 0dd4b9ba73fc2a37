//! Property-Based Test Generators
//!
//! Proptest strategies for fleet data, plus `fake`-backed helpers for
//! realistic client names.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Litres, Money};
use fake::faker::company::en::CompanyName;
use fake::Fake;
use proptest::prelude::*;

/// Strategy for normalized plate numbers such as `1234-BBB`
pub fn plate_number_strategy() -> impl Strategy<Value = String> {
    "[0-9]{4}-[A-Z]{3}"
}

/// Strategy for plate numbers as a user might type them: mixed case with
/// surrounding whitespace
pub fn raw_plate_input_strategy() -> impl Strategy<Value = (String, String)> {
    (plate_number_strategy(), any::<bool>(), " {0,3}", "[ \t]{0,3}").prop_map(
        |(normalized, lower, lead, trail)| {
            let body = if lower {
                normalized.to_lowercase()
            } else {
                normalized.clone()
            };
            (format!("{lead}{body}{trail}"), normalized)
        },
    )
}

/// Strategy for non-negative `Money` values up to 100 000 €
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::from_minor)
}

/// Strategy for non-negative `Litres` values
pub fn litres_strategy() -> impl Strategy<Value = Litres> {
    (0i64..2_000_000i64).prop_map(Litres::from_millilitres)
}

/// Strategy for decimal form input using either `.` or `,` as separator
///
/// Yields the input text and the value in hundredths.
pub fn decimal_input_strategy() -> impl Strategy<Value = (String, i64)> {
    (0i64..100_000i64, 0i64..100i64, any::<bool>()).prop_map(|(whole, frac, comma)| {
        let separator = if comma { ',' } else { '.' };
        (
            format!("{whole}{separator}{frac:02}"),
            whole * 100 + frac,
        )
    })
}

/// Strategy for refill dates within 2024
pub fn refill_date_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..366 * 24 * 60).prop_map(|minutes| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::minutes(minutes)
    })
}

/// A random, realistic client name
pub fn fake_client_name() -> String {
    CompanyName().fake()
}

/// `count` distinct fake client names
pub fn fake_client_names(count: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(count);
    while names.len() < count {
        let name = fake_client_name();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
