//! Refill DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{parse_refill_date, CoreError, Litres, Money};
use domain_fleet::{ClientRef, CreateRefill, PlateRef, Refill};

use crate::dto::common::{non_blank, parse_optional_integer};
use crate::error::ApiError;

/// Form body of `createRepostaje`
///
/// Every field arrives as text; numbers accept `,` as decimal separator.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefillForm {
    #[validate(length(min = 1, message = "date is required"))]
    pub fecha: String,
    #[serde(default)]
    pub numero_operacion: Option<String>,
    pub cliente_nombre: String,
    #[validate(length(min = 1, message = "quantity is required"))]
    pub cantidad: String,
    #[validate(length(min = 1, message = "amount is required"))]
    pub importe: String,
    pub matricula_numero: String,
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl CreateRefillForm {
    /// Validates and parses the form into a service request
    pub fn into_request(self) -> Result<CreateRefill, ApiError> {
        self.validate()?;

        let date = parse_refill_date(&self.fecha).map_err(CoreError::from)?;
        let quantity = Litres::parse(&self.cantidad).map_err(CoreError::from)?;
        let amount = Money::parse(&self.importe).map_err(CoreError::from)?;
        let operation_number =
            parse_optional_integer(self.numero_operacion.as_deref(), "numeroOperacion")?;

        Ok(CreateRefill {
            date,
            operation_number,
            client: ClientRef::Name(self.cliente_nombre),
            plate: PlateRef::Number(self.matricula_numero),
            quantity,
            amount,
            comment: non_blank(self.comentarios),
        })
    }
}

/// A refill row in listings
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefillResponse {
    pub id: i64,
    pub fecha: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub importe: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cantidad: Decimal,
    pub comentarios: Option<String>,
    pub numero_operacion: Option<i64>,
    pub cliente_id: i64,
    pub matricula_id: i64,
}

impl From<Refill> for RefillResponse {
    fn from(refill: Refill) -> Self {
        Self {
            id: refill.id.value(),
            fecha: refill.date,
            importe: refill.amount.amount(),
            cantidad: refill.quantity.value(),
            comentarios: refill.comment,
            numero_operacion: refill.operation_number,
            cliente_id: refill.client_id.value(),
            matricula_id: refill.plate_id.value(),
        }
    }
}
