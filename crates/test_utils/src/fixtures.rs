//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit and integration tests. The client
//! and plate fixtures match the demo data set seeded by `infra_db::seed`.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Litres, Money};
use rust_decimal_macros::dec;

/// Fixture for client data
pub struct ClientFixtures;

impl ClientFixtures {
    /// Name of the first demo client
    pub fn transportes_rapido() -> &'static str {
        "Transportes Rápido SL"
    }

    /// Notes of the first demo client
    pub fn transportes_rapido_notes() -> &'static str {
        "Cliente VIP - Pago a 30 días"
    }

    /// Name of the second demo client
    pub fn logistica_david() -> &'static str {
        "Logística David"
    }

    /// Notes of the second demo client
    pub fn logistica_david_notes() -> &'static str {
        "Sin incidencias"
    }

    /// A name that matches no demo client under any casing
    pub fn unknown() -> &'static str {
        "Cliente Inexistente"
    }
}

/// Fixture for plate numbers
pub struct PlateFixtures;

impl PlateFixtures {
    /// First plate of Transportes Rápido SL
    pub fn bbb() -> &'static str {
        "1234-BBB"
    }

    /// Second plate of Transportes Rápido SL
    pub fn ccc() -> &'static str {
        "5678-CCC"
    }

    /// Only plate of Logística David
    pub fn zzz() -> &'static str {
        "9999-ZZZ"
    }

    /// A number that is not stored anywhere
    pub fn unknown() -> &'static str {
        "0000-XXX"
    }
}

/// Fixture for refill dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A morning refill (Mar 4, 2024 08:15 UTC)
    pub fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 8, 15, 0).unwrap()
    }

    /// Later the same day
    pub fn evening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, 19, 40, 0).unwrap()
    }

    /// A refill the following month
    pub fn next_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap()
    }

    /// The morning fixture as an HTML `datetime-local` value
    pub fn morning_form_value() -> &'static str {
        "2024-03-04T08:15"
    }
}

/// Fixture for money amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical full-tank amount
    pub fn full_tank() -> Money {
        Money::new(dec!(83.25))
    }

    /// A small top-up amount
    pub fn top_up() -> Money {
        Money::new(dec!(15.10))
    }
}

/// Fixture for fuel quantities
pub struct LitreFixtures;

impl LitreFixtures {
    /// Litres for [`MoneyFixtures::full_tank`]
    pub fn full_tank() -> Litres {
        Litres::new(dec!(55.5))
    }

    /// Litres for [`MoneyFixtures::top_up`]
    pub fn top_up() -> Litres {
        Litres::new(dec!(10.07))
    }
}
