//! Fleet domain services
//!
//! `FleetService` carries the operations behind every admin action. Each one
//! is a short, sequential run of port calls: optional lookups, then at most
//! one write. Nothing is retried and nothing spans a transaction.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument, warn};

use core_kernel::{ClientId, Litres, Money, PlateId, RefillId};

use crate::client::{Client, ClientDraft};
use crate::error::FleetError;
use crate::plate::{Plate, PlateDraft, PlateNumber};
use crate::ports::FleetPort;
use crate::refill::{NewRefill, Refill};
use crate::resolve::{resolve_client, resolve_plate, ClientRef, NameMatch, PlateRef};
use crate::stats::{ClientStats, EFFICIENCY_LIMIT};

/// Message used when a refill write fails without saying why
pub const DEFAULT_REFILL_ERROR: &str = "failed to save refill";

/// Result of an upsert, selected by presence of an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome<I> {
    /// No id was supplied; a new row was inserted
    Created(I),
    /// The id matched a row which was updated
    Updated(I),
    /// An id was supplied but no row had it; nothing was written
    Unmatched(I),
}

impl<I: Copy> UpsertOutcome<I> {
    pub fn id(&self) -> I {
        match self {
            UpsertOutcome::Created(id) | UpsertOutcome::Updated(id) | UpsertOutcome::Unmatched(id) => *id,
        }
    }
}

/// Create-or-update request for a client
#[derive(Debug, Clone)]
pub struct UpsertClient {
    pub id: Option<ClientId>,
    pub name: String,
    pub notes: Option<String>,
}

impl UpsertClient {
    pub fn create(name: impl Into<String>, notes: Option<String>) -> Self {
        Self { id: None, name: name.into(), notes }
    }

    pub fn update(id: ClientId, name: impl Into<String>, notes: Option<String>) -> Self {
        Self { id: Some(id), name: name.into(), notes }
    }
}

/// Create-or-update request for a plate
#[derive(Debug, Clone)]
pub struct UpsertPlate {
    pub id: Option<PlateId>,
    /// Raw number as typed; normalized before storage
    pub number: String,
    /// Owner; names are trimmed and matched case-insensitively
    pub client: ClientRef,
}

/// Request to record a refill
#[derive(Debug, Clone)]
pub struct CreateRefill {
    pub date: DateTime<Utc>,
    pub operation_number: Option<i64>,
    /// Client; names are matched exactly
    pub client: ClientRef,
    /// Plate; numbers are matched exactly
    pub plate: PlateRef,
    pub quantity: Litres,
    pub amount: Money,
    pub comment: Option<String>,
}

/// Application service for the fleet admin actions
#[derive(Clone)]
pub struct FleetService {
    port: Arc<dyn FleetPort>,
}

impl FleetService {
    /// Creates the service over a data-access port
    pub fn new(port: Arc<dyn FleetPort>) -> Self {
        Self { port }
    }

    /// Returns the underlying port
    pub fn port(&self) -> &Arc<dyn FleetPort> {
        &self.port
    }

    // ========================================================================
    // Clients
    // ========================================================================

    /// Computes the statistics shown in a client's information modal
    ///
    /// # Arguments
    ///
    /// * `id` - The client identifier
    ///
    /// # Returns
    ///
    /// Plates, totals, last payment date and per-plate spend. An unknown id
    /// yields empty name/notes and zeroed aggregates.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn client_stats(&self, id: ClientId) -> Result<ClientStats, FleetError> {
        let client = self.port.get_client(id).await?;
        let plates = self.port.plates_for_client(id).await?;
        let totals = self.port.refill_totals(id).await?;
        let last = self.port.last_refill(id).await?;
        let efficiency = self.port.plate_spend(id, EFFICIENCY_LIMIT).await?;

        if client.is_none() {
            debug!("stats requested for unknown client");
        }

        let (name, notes) = client.map(|c| (Some(c.name), c.notes)).unwrap_or((None, None));

        Ok(ClientStats {
            name,
            notes,
            total_litres: totals.litres,
            total_amount: totals.amount,
            plate_count: plates.len(),
            plates: plates.into_iter().map(|p| p.number.into_inner()).collect(),
            last_payment: last.map(|r| r.date),
            efficiency,
        })
    }

    /// Lists all clients ordered by name
    pub async fn list_clients(&self) -> Result<Vec<Client>, FleetError> {
        Ok(self.port.list_clients().await?)
    }

    /// Creates a client when no id is given, otherwise updates it in place
    ///
    /// # Errors
    ///
    /// `FleetError::Validation` if the name is blank
    #[instrument(skip(self, request), fields(client_id = ?request.id))]
    pub async fn upsert_client(
        &self,
        request: UpsertClient,
    ) -> Result<UpsertOutcome<ClientId>, FleetError> {
        if request.name.trim().is_empty() {
            return Err(FleetError::validation("client name must not be empty"));
        }
        let draft = ClientDraft::new(request.name, request.notes);

        match request.id {
            Some(id) => {
                if self.port.update_client(id, &draft).await? {
                    info!(%id, "client updated");
                    Ok(UpsertOutcome::Updated(id))
                } else {
                    warn!(%id, "client update matched no row");
                    Ok(UpsertOutcome::Unmatched(id))
                }
            }
            None => {
                let id = self.port.insert_client(&draft).await?;
                info!(%id, "client created");
                Ok(UpsertOutcome::Created(id))
            }
        }
    }

    /// Deletes a client unconditionally
    ///
    /// Plates and refills that reference the client are not touched.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn delete_client(&self, id: ClientId) -> Result<(), FleetError> {
        let removed = self.port.delete_client(id).await?;
        debug!(removed, "client delete executed");
        Ok(())
    }

    // ========================================================================
    // Plates
    // ========================================================================

    /// Lists all plates ordered by number
    pub async fn list_plates(&self) -> Result<Vec<Plate>, FleetError> {
        Ok(self.port.list_plates().await?)
    }

    /// Creates or updates a plate, resolving its owner by name
    ///
    /// The number is trimmed and upper-cased before storage. The client
    /// name is trimmed and compared case-insensitively.
    ///
    /// # Errors
    ///
    /// - `FleetError::Validation` if the number is blank
    /// - `FleetError::ClientNotFound` if the owner does not resolve; nothing is written
    /// - `FleetError::Conflict` if another plate already has the number
    #[instrument(skip(self, request), fields(plate_id = ?request.id))]
    pub async fn upsert_plate(
        &self,
        request: UpsertPlate,
    ) -> Result<UpsertOutcome<PlateId>, FleetError> {
        let number = PlateNumber::parse(&request.number)?;
        let client_ref = match request.client {
            ClientRef::Name(name) => ClientRef::Name(name.trim().to_string()),
            other => other,
        };
        let client = resolve_client(self.port.as_ref(), &client_ref, NameMatch::CaseInsensitive).await?;

        let draft = PlateDraft {
            number,
            client_id: client.id,
        };

        match request.id {
            Some(id) => {
                if self.port.update_plate(id, &draft).await? {
                    info!(%id, number = %draft.number, "plate updated");
                    Ok(UpsertOutcome::Updated(id))
                } else {
                    warn!(%id, "plate update matched no row");
                    Ok(UpsertOutcome::Unmatched(id))
                }
            }
            None => {
                let id = self.port.insert_plate(&draft).await?;
                info!(%id, number = %draft.number, "plate created");
                Ok(UpsertOutcome::Created(id))
            }
        }
    }

    /// Deletes a plate unconditionally
    #[instrument(skip(self), fields(plate_id = %id))]
    pub async fn delete_plate(&self, id: PlateId) -> Result<(), FleetError> {
        let removed = self.port.delete_plate(id).await?;
        debug!(removed, "plate delete executed");
        Ok(())
    }

    // ========================================================================
    // Refills
    // ========================================================================

    /// Lists all refills, most recent first
    pub async fn list_refills(&self) -> Result<Vec<Refill>, FleetError> {
        Ok(self.port.list_refills().await?)
    }

    /// Records a refill after resolving its client and plate
    ///
    /// Both lookups run before the insert, so a failed lookup writes nothing.
    ///
    /// # Errors
    ///
    /// - `FleetError::ClientNotFound` / `FleetError::PlateNotFound`
    /// - datastore failures, carrying [`DEFAULT_REFILL_ERROR`] when the
    ///   underlying error has no message
    #[instrument(skip(self, request))]
    pub async fn create_refill(&self, request: CreateRefill) -> Result<RefillId, FleetError> {
        let result = self.try_create_refill(request).await;
        if let Err(ref e) = result {
            warn!(error = %e, "refill not saved");
        }
        result
    }

    async fn try_create_refill(&self, request: CreateRefill) -> Result<RefillId, FleetError> {
        let port = self.port.as_ref();
        let client = resolve_client(port, &request.client, NameMatch::Exact)
            .await
            .map_err(refill_error)?;
        let plate = resolve_plate(port, &request.plate).await.map_err(refill_error)?;

        let refill = NewRefill {
            date: request.date,
            amount: request.amount,
            quantity: request.quantity,
            comment: request.comment.filter(|c| !c.trim().is_empty()),
            operation_number: request.operation_number,
            client_id: client.id,
            plate_id: plate.id,
        };

        let id = port
            .insert_refill(&refill)
            .await
            .map_err(|e| FleetError::from_port_or(e, DEFAULT_REFILL_ERROR))?;

        info!(%id, client_id = %client.id, plate_id = %plate.id, "refill recorded");
        Ok(id)
    }

    /// Deletes a refill unconditionally
    #[instrument(skip(self), fields(refill_id = %id))]
    pub async fn delete_refill(&self, id: RefillId) -> Result<(), FleetError> {
        let removed = self.port.delete_refill(id).await?;
        debug!(removed, "refill delete executed");
        Ok(())
    }
}

fn refill_error(err: FleetError) -> FleetError {
    match err {
        FleetError::Storage(message) if message.trim().is_empty() => {
            FleetError::Storage(DEFAULT_REFILL_ERROR.to_string())
        }
        other => other,
    }
}
