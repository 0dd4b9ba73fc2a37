//! SQLite Fleet Adapter
//!
//! The `SqliteFleetAdapter` is the production implementation of
//! `FleetPort`. It:
//!
//! - Converts domain values to storage form (cents, millilitres, raw ids)
//! - Delegates every statement to the client, plate and refill repositories
//! - Converts rows back to domain types
//! - Translates `DatabaseError` into `PortError`

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, ClientId, DomainPort, HealthCheckResult, HealthCheckable, Litres, Money,
    PlateId, PortError, RefillId,
};
use domain_fleet::{
    Client, ClientDraft, FleetPort, NameMatch, NewRefill, Plate, PlateDraft, PlateNumber,
    PlateSpend, Refill, RefillTotals,
};

use crate::error::DatabaseError;
use crate::repositories::client::{ClientRepository, ClientRow, NewClient};
use crate::repositories::plate::{NewPlate, PlateRepository, PlateRow};
use crate::repositories::refill::{NewRefillRow, RefillRepository, RefillRow};

const ADAPTER_ID: &str = "sqlite-fleet-adapter";

/// SQLite-backed implementation of the FleetPort trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DuplicateEntry` -> `PortError::Conflict`
/// - constraint violations -> `PortError::Validation`
/// - connection and pool failures -> `PortError::Connection`
/// - everything else -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct SqliteFleetAdapter {
    clients: ClientRepository,
    plates: PlateRepository,
    refills: RefillRepository,
    pool: SqlitePool,
}

impl SqliteFleetAdapter {
    /// Creates a new SQLite fleet adapter over a migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            clients: ClientRepository::new(pool.clone()),
            plates: PlateRepository::new(pool.clone()),
            refills: RefillRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl DomainPort for SqliteFleetAdapter {}

#[async_trait]
impl HealthCheckable for SqliteFleetAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl FleetPort for SqliteFleetAdapter {
    // ========================================================================
    // Clients
    // ========================================================================

    #[instrument(skip(self), fields(client_id = %id))]
    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        let row = self.clients.find_by_id(id.value()).await.map_err(db_to_port_error)?;
        Ok(row.map(row_to_client))
    }

    async fn list_clients(&self) -> Result<Vec<Client>, PortError> {
        let rows = self.clients.list().await.map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_client).collect())
    }

    #[instrument(skip(self))]
    async fn find_client_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Option<Client>, PortError> {
        let row = match mode {
            NameMatch::Exact => self.clients.find_by_name(name).await,
            NameMatch::CaseInsensitive => self.clients.find_by_name_ignore_case(name).await,
        }
        .map_err(db_to_port_error)?;

        debug!(found = row.is_some(), "client name lookup");
        Ok(row.map(row_to_client))
    }

    #[instrument(skip(self, draft))]
    async fn insert_client(&self, draft: &ClientDraft) -> Result<ClientId, PortError> {
        let id = self
            .clients
            .insert(&client_to_row(draft))
            .await
            .map_err(db_to_port_error)?;
        Ok(ClientId::new(id))
    }

    #[instrument(skip(self, draft), fields(client_id = %id))]
    async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> Result<bool, PortError> {
        self.clients
            .update(id.value(), &client_to_row(draft))
            .await
            .map_err(db_to_port_error)
    }

    #[instrument(skip(self), fields(client_id = %id))]
    async fn delete_client(&self, id: ClientId) -> Result<bool, PortError> {
        self.clients.delete(id.value()).await.map_err(db_to_port_error)
    }

    // ========================================================================
    // Plates
    // ========================================================================

    #[instrument(skip(self), fields(plate_id = %id))]
    async fn get_plate(&self, id: PlateId) -> Result<Option<Plate>, PortError> {
        let row = self.plates.find_by_id(id.value()).await.map_err(db_to_port_error)?;
        Ok(row.map(row_to_plate))
    }

    async fn list_plates(&self) -> Result<Vec<Plate>, PortError> {
        let rows = self.plates.list().await.map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_plate).collect())
    }

    async fn plates_for_client(&self, client_id: ClientId) -> Result<Vec<Plate>, PortError> {
        let rows = self
            .plates
            .list_for_client(client_id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_plate).collect())
    }

    #[instrument(skip(self))]
    async fn find_plate_by_number(&self, number: &str) -> Result<Option<Plate>, PortError> {
        let row = self.plates.find_by_number(number).await.map_err(db_to_port_error)?;
        Ok(row.map(row_to_plate))
    }

    #[instrument(skip(self, draft), fields(number = %draft.number))]
    async fn insert_plate(&self, draft: &PlateDraft) -> Result<PlateId, PortError> {
        let id = self
            .plates
            .insert(&plate_to_row(draft))
            .await
            .map_err(db_to_port_error)?;
        Ok(PlateId::new(id))
    }

    #[instrument(skip(self, draft), fields(plate_id = %id, number = %draft.number))]
    async fn update_plate(&self, id: PlateId, draft: &PlateDraft) -> Result<bool, PortError> {
        self.plates
            .update(id.value(), &plate_to_row(draft))
            .await
            .map_err(db_to_port_error)
    }

    #[instrument(skip(self), fields(plate_id = %id))]
    async fn delete_plate(&self, id: PlateId) -> Result<bool, PortError> {
        self.plates.delete(id.value()).await.map_err(db_to_port_error)
    }

    // ========================================================================
    // Refills
    // ========================================================================

    async fn list_refills(&self) -> Result<Vec<Refill>, PortError> {
        let rows = self.refills.list().await.map_err(db_to_port_error)?;
        Ok(rows.into_iter().map(row_to_refill).collect())
    }

    #[instrument(skip(self, refill), fields(client_id = %refill.client_id, plate_id = %refill.plate_id))]
    async fn insert_refill(&self, refill: &NewRefill) -> Result<RefillId, PortError> {
        let row = refill_to_row(refill)?;
        let id = self.refills.insert(&row).await.map_err(db_to_port_error)?;
        Ok(RefillId::new(id))
    }

    #[instrument(skip(self), fields(refill_id = %id))]
    async fn delete_refill(&self, id: RefillId) -> Result<bool, PortError> {
        self.refills.delete(id.value()).await.map_err(db_to_port_error)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn refill_totals(&self, client_id: ClientId) -> Result<RefillTotals, PortError> {
        let row = self
            .refills
            .totals_for_client(client_id.value())
            .await
            .map_err(db_to_port_error)?;

        Ok(RefillTotals {
            litres: Litres::from_millilitres(row.quantity_ml),
            amount: Money::from_minor(row.amount_cents),
            count: u64::try_from(row.refill_count).unwrap_or_default(),
        })
    }

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn last_refill(&self, client_id: ClientId) -> Result<Option<Refill>, PortError> {
        let row = self
            .refills
            .last_for_client(client_id.value())
            .await
            .map_err(db_to_port_error)?;
        Ok(row.map(row_to_refill))
    }

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn plate_spend(
        &self,
        client_id: ClientId,
        limit: u32,
    ) -> Result<Vec<PlateSpend>, PortError> {
        let rows = self
            .refills
            .spend_by_plate(client_id.value(), limit)
            .await
            .map_err(db_to_port_error)?;

        Ok(rows
            .into_iter()
            .map(|row| PlateSpend {
                number: row.number,
                total: Money::from_minor(row.total_cents),
            })
            .collect())
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

/// Converts a DatabaseError to a PortError
fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound(msg) => PortError::not_found("record", msg),
        DatabaseError::DuplicateEntry(msg) => PortError::conflict(msg),
        DatabaseError::ForeignKeyViolation(msg) | DatabaseError::ConstraintViolation(msg) => {
            PortError::validation(msg)
        }
        DatabaseError::ConnectionFailed(msg) => PortError::connection(msg),
        DatabaseError::PoolExhausted => PortError::connection("connection pool exhausted"),
        other => PortError::Internal {
            message: other.to_string(),
            source: Some(Box::new(other)),
        },
    }
}

fn row_to_client(row: ClientRow) -> Client {
    Client {
        id: ClientId::new(row.id),
        name: row.name,
        notes: row.notes,
    }
}

fn client_to_row(draft: &ClientDraft) -> NewClient {
    NewClient {
        name: draft.name.clone(),
        notes: draft.notes.clone(),
    }
}

fn row_to_plate(row: PlateRow) -> Plate {
    Plate {
        id: PlateId::new(row.id),
        number: PlateNumber::from_stored(row.number),
        client_id: ClientId::new(row.client_id),
    }
}

fn plate_to_row(draft: &PlateDraft) -> NewPlate {
    NewPlate {
        number: draft.number.as_str().to_string(),
        client_id: draft.client_id.value(),
    }
}

fn row_to_refill(row: RefillRow) -> Refill {
    Refill {
        id: RefillId::new(row.id),
        date: row.date,
        amount: Money::from_minor(row.amount_cents),
        quantity: Litres::from_millilitres(row.quantity_ml),
        comment: row.comment,
        operation_number: row.operation_number,
        client_id: ClientId::new(row.client_id),
        plate_id: PlateId::new(row.plate_id),
    }
}

fn refill_to_row(refill: &NewRefill) -> Result<NewRefillRow, PortError> {
    let amount_cents = refill
        .amount
        .to_minor()
        .map_err(|e| PortError::validation_field(e.to_string(), "importe"))?;
    let quantity_ml = refill
        .quantity
        .to_millilitres()
        .map_err(|e| PortError::validation_field(e.to_string(), "cantidad"))?;

    Ok(NewRefillRow {
        date: refill.date,
        amount_cents,
        quantity_ml,
        comment: refill.comment.clone(),
        operation_number: refill.operation_number,
        client_id: refill.client_id.value(),
        plate_id: refill.plate_id.value(),
    })
}
