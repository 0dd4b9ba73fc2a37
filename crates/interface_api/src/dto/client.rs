//! Client DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ClientId;
use domain_fleet::{Client, ClientStats, PlateSpend, UpsertClient};

use crate::dto::common::{non_blank, parse_form_id};
use crate::error::ApiError;

/// Form body of `upsertClient`
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertClientForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "client name is required"))]
    pub nombre: String,
    #[serde(default)]
    pub observaciones: Option<String>,
}

impl UpsertClientForm {
    /// Validates the form and converts it to a service request
    pub fn into_request(self) -> Result<UpsertClient, ApiError> {
        self.validate()?;
        Ok(UpsertClient {
            id: parse_form_id(self.id.as_deref())?.map(ClientId::new),
            name: self.nombre,
            notes: non_blank(self.observaciones),
        })
    }
}

/// Response of `getClientStats`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientStatsResponse {
    pub nombre: Option<String>,
    pub observaciones: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub litros: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub importe: Decimal,
    pub num_matriculas: usize,
    pub lista_matriculas: Vec<String>,
    pub ultimo_pago: Option<DateTime<Utc>>,
    pub eficiencia: Vec<PlateSpendResponse>,
}

/// One entry of the per-plate spend list
#[derive(Debug, Serialize, Deserialize)]
pub struct PlateSpendResponse {
    pub numero: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<PlateSpend> for PlateSpendResponse {
    fn from(spend: PlateSpend) -> Self {
        Self {
            numero: spend.number,
            total: spend.total.amount(),
        }
    }
}

impl From<ClientStats> for ClientStatsResponse {
    fn from(stats: ClientStats) -> Self {
        Self {
            nombre: stats.name,
            observaciones: stats.notes,
            litros: stats.total_litres.value(),
            importe: stats.total_amount.amount(),
            num_matriculas: stats.plate_count,
            lista_matriculas: stats.plates,
            ultimo_pago: stats.last_payment,
            eficiencia: stats.efficiency.into_iter().map(Into::into).collect(),
        }
    }
}

/// A client row in listings
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientResponse {
    pub id: i64,
    pub nombre: String,
    pub observaciones: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.value(),
            nombre: client.name,
            observaciones: client.notes,
        }
    }
}
