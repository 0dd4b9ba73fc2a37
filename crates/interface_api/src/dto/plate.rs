//! Plate DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::PlateId;
use domain_fleet::{ClientRef, Plate, UpsertPlate};

use crate::dto::common::parse_form_id;
use crate::error::ApiError;

/// Form body of `upsertMatricula`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPlateForm {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "plate number is required"))]
    pub numero: String,
    /// Owner, matched by name
    pub cliente_nombre: String,
}

impl UpsertPlateForm {
    pub fn into_request(self) -> Result<UpsertPlate, ApiError> {
        self.validate()?;
        Ok(UpsertPlate {
            id: parse_form_id(self.id.as_deref())?.map(PlateId::new),
            number: self.numero,
            client: ClientRef::Name(self.cliente_nombre),
        })
    }
}

/// A plate row in listings
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateResponse {
    pub id: i64,
    pub numero: String,
    pub cliente_id: i64,
}

impl From<Plate> for PlateResponse {
    fn from(plate: Plate) -> Self {
        Self {
            id: plate.id.value(),
            numero: plate.number.into_inner(),
            cliente_id: plate.client_id.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_keeps_raw_values_for_the_service() {
        let form = UpsertPlateForm {
            id: None,
            numero: " 1234-bbb ".into(),
            cliente_nombre: " transportes rápido sl ".into(),
        };
        let request = form.into_request().unwrap();

        assert_eq!(request.number, " 1234-bbb ");
        assert_eq!(request.client, ClientRef::name(" transportes rápido sl "));
    }

    #[test]
    fn test_empty_number_fails_validation() {
        let form = UpsertPlateForm {
            id: Some("1".into()),
            numero: String::new(),
            cliente_nombre: "A".into(),
        };
        assert!(matches!(form.into_request(), Err(ApiError::Validation(_))));
    }
}
