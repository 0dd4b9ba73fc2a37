//! Refill entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, Litres, Money, PlateId, RefillId};

/// A fueling transaction ("repostaje")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refill {
    pub id: RefillId,
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub quantity: Litres,
    pub comment: Option<String>,
    /// Ticket or terminal operation number, when the station prints one
    pub operation_number: Option<i64>,
    pub client_id: ClientId,
    pub plate_id: PlateId,
}

/// A refill ready to insert, with both foreign keys resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRefill {
    pub date: DateTime<Utc>,
    pub amount: Money,
    pub quantity: Litres,
    pub comment: Option<String>,
    pub operation_number: Option<i64>,
    pub client_id: ClientId,
    pub plate_id: PlateId,
}

impl Refill {
    pub fn from_new(id: RefillId, new: &NewRefill) -> Self {
        Self {
            id,
            date: new.date,
            amount: new.amount,
            quantity: new.quantity,
            comment: new.comment.clone(),
            operation_number: new.operation_number,
            client_id: new.client_id,
            plate_id: new.plate_id,
        }
    }
}
