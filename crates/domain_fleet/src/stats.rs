//! Client statistics
//!
//! The information modal of a client shows its plates, what it has spent and
//! refuelled overall, when it last paid, and a short per-plate spend list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Litres, Money};

/// Maximum number of entries in the per-plate spend list
pub const EFFICIENCY_LIMIT: u32 = 3;

/// Summed refill figures for one client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillTotals {
    pub litres: Litres,
    pub amount: Money,
    pub count: u64,
}

/// Total spend on one plate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateSpend {
    pub number: String,
    pub total: Money,
}

/// Flat statistics for one client
///
/// An unknown client yields `name == None` with every aggregate at zero,
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStats {
    pub name: Option<String>,
    pub notes: Option<String>,
    pub total_litres: Litres,
    pub total_amount: Money,
    pub plate_count: usize,
    pub plates: Vec<String>,
    pub last_payment: Option<DateTime<Utc>>,
    /// Per-plate spend, at most [`EFFICIENCY_LIMIT`] entries.
    ///
    /// NOTE: entries are the first groups in plate-number order, not the
    /// highest spenders. Whether a true top-3 by spend was intended is an
    /// open question, so the ordering is kept as the admin UI receives it.
    pub efficiency: Vec<PlateSpend>,
}
