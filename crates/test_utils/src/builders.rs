//! Test Data Builders
//!
//! Builders for service requests and for the urlencoded bodies the action
//! endpoints accept. Tests set only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ClientId, Litres, Money, PlateId};
use domain_fleet::{ClientRef, CreateRefill, PlateRef, UpsertClient, UpsertPlate};

use crate::fixtures::{
    ClientFixtures, LitreFixtures, MoneyFixtures, PlateFixtures, TemporalFixtures,
};

/// Builder for [`CreateRefill`] requests
///
/// Defaults to a full-tank refill of `1234-BBB` by Transportes Rápido SL.
#[derive(Debug, Clone)]
pub struct CreateRefillBuilder {
    date: DateTime<Utc>,
    operation_number: Option<i64>,
    client: ClientRef,
    plate: PlateRef,
    quantity: Litres,
    amount: Money,
    comment: Option<String>,
}

impl Default for CreateRefillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateRefillBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            date: TemporalFixtures::morning(),
            operation_number: None,
            client: ClientRef::name(ClientFixtures::transportes_rapido()),
            plate: PlateRef::number(PlateFixtures::bbb()),
            quantity: LitreFixtures::full_tank(),
            amount: MoneyFixtures::full_tank(),
            comment: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_operation_number(mut self, number: i64) -> Self {
        self.operation_number = Some(number);
        self
    }

    /// Refers to the client by name
    pub fn with_client(mut self, name: impl Into<String>) -> Self {
        self.client = ClientRef::Name(name.into());
        self
    }

    /// Refers to the plate by number
    pub fn with_plate(mut self, number: impl Into<String>) -> Self {
        self.plate = PlateRef::Number(number.into());
        self
    }

    pub fn with_quantity(mut self, quantity: Litres) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> CreateRefill {
        CreateRefill {
            date: self.date,
            operation_number: self.operation_number,
            client: self.client,
            plate: self.plate,
            quantity: self.quantity,
            amount: self.amount,
            comment: self.comment,
        }
    }
}

/// Builder for [`UpsertPlate`] requests
#[derive(Debug, Clone)]
pub struct UpsertPlateBuilder {
    id: Option<PlateId>,
    number: String,
    client: String,
}

impl Default for UpsertPlateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpsertPlateBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            number: PlateFixtures::bbb().to_string(),
            client: ClientFixtures::transportes_rapido().to_string(),
        }
    }

    /// Turns the request into an update of `id`
    pub fn updating(mut self, id: PlateId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_client(mut self, name: impl Into<String>) -> Self {
        self.client = name.into();
        self
    }

    pub fn build(self) -> UpsertPlate {
        UpsertPlate {
            id: self.id,
            number: self.number,
            client: ClientRef::Name(self.client),
        }
    }
}

/// Builder for [`UpsertClient`] requests
#[derive(Debug, Clone)]
pub struct UpsertClientBuilder {
    id: Option<ClientId>,
    name: String,
    notes: Option<String>,
}

impl Default for UpsertClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpsertClientBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: ClientFixtures::transportes_rapido().to_string(),
            notes: Some(ClientFixtures::transportes_rapido_notes().to_string()),
        }
    }

    pub fn updating(mut self, id: ClientId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn without_notes(mut self) -> Self {
        self.notes = None;
        self
    }

    pub fn build(self) -> UpsertClient {
        UpsertClient {
            id: self.id,
            name: self.name,
            notes: self.notes,
        }
    }
}

/// Builder for the urlencoded body of the `createRepostaje` action
///
/// Values are kept as strings, exactly as a browser submits them.
#[derive(Debug, Clone)]
pub struct RefillFormBuilder {
    fields: Vec<(&'static str, String)>,
}

impl Default for RefillFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RefillFormBuilder {
    /// A complete, valid form for the default refill
    pub fn new() -> Self {
        Self {
            fields: vec![
                ("fecha", TemporalFixtures::morning_form_value().to_string()),
                ("numeroOperacion", String::new()),
                ("clienteNombre", ClientFixtures::transportes_rapido().to_string()),
                ("matriculaNumero", PlateFixtures::bbb().to_string()),
                ("cantidad", "55,5".to_string()),
                ("importe", "83.25".to_string()),
                ("comentarios", String::new()),
            ],
        }
    }

    /// Sets or replaces a field
    pub fn set(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(field) => field.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    /// Drops a field from the body
    pub fn without(mut self, key: &str) -> Self {
        self.fields.retain(|(k, _)| *k != key);
        self
    }

    pub fn build(self) -> Vec<(&'static str, String)> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_builder_defaults() {
        let request = CreateRefillBuilder::new().with_operation_number(7).build();
        assert_eq!(request.client, ClientRef::name(ClientFixtures::transportes_rapido()));
        assert_eq!(request.plate, PlateRef::number(PlateFixtures::bbb()));
        assert_eq!(request.operation_number, Some(7));
    }

    #[test]
    fn test_form_builder_replaces_fields() {
        let form = RefillFormBuilder::new()
            .set("importe", "10")
            .without("comentarios")
            .build();

        assert_eq!(form.iter().filter(|(k, _)| *k == "importe").count(), 1);
        assert!(form.iter().any(|(k, v)| *k == "importe" && v == "10"));
        assert!(!form.iter().any(|(k, _)| *k == "comentarios"));
    }
}
