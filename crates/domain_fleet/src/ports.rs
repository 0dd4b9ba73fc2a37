//! Fleet Domain Ports
//!
//! This module defines the data-access interface of the fleet domain. The
//! service never touches a database handle directly; it receives an
//! `Arc<dyn FleetPort>` at construction time.
//!
//! - **SQLite Adapter**: `infra_db::adapters::SqliteFleetAdapter`
//! - **Mock Adapter**: [`mock::MockFleetPort`], in memory, for tests
//!
//! Every write is a single statement. Lookups return `Ok(None)` for a
//! missing row; only genuine datastore failures are errors.

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, HealthCheckable, PlateId, PortError, RefillId};

use crate::client::{Client, ClientDraft};
use crate::plate::{Plate, PlateDraft};
use crate::refill::{NewRefill, Refill};
use crate::resolve::NameMatch;
use crate::stats::{PlateSpend, RefillTotals};

/// The port trait for fleet data access
#[async_trait]
pub trait FleetPort: DomainPort + HealthCheckable {
    // ========================================================================
    // Clients
    // ========================================================================

    /// Retrieves a client by id
    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, PortError>;

    /// Lists all clients ordered by name
    async fn list_clients(&self) -> Result<Vec<Client>, PortError>;

    /// Finds the first client whose name matches `name`
    async fn find_client_by_name(
        &self,
        name: &str,
        mode: NameMatch,
    ) -> Result<Option<Client>, PortError>;

    /// Inserts a client and returns its new id
    async fn insert_client(&self, draft: &ClientDraft) -> Result<ClientId, PortError>;

    /// Updates a client in place; returns false when no row matched
    async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> Result<bool, PortError>;

    /// Deletes a client; plates and refills referencing it are left alone
    async fn delete_client(&self, id: ClientId) -> Result<bool, PortError>;

    // ========================================================================
    // Plates
    // ========================================================================

    async fn get_plate(&self, id: PlateId) -> Result<Option<Plate>, PortError>;

    /// Lists all plates ordered by number
    async fn list_plates(&self) -> Result<Vec<Plate>, PortError>;

    /// Lists the plates owned by a client, ordered by number
    async fn plates_for_client(&self, client_id: ClientId) -> Result<Vec<Plate>, PortError>;

    /// Finds a plate by exact number
    async fn find_plate_by_number(&self, number: &str) -> Result<Option<Plate>, PortError>;

    /// Inserts a plate; a duplicate number is a `PortError::Conflict`
    async fn insert_plate(&self, draft: &PlateDraft) -> Result<PlateId, PortError>;

    async fn update_plate(&self, id: PlateId, draft: &PlateDraft) -> Result<bool, PortError>;

    async fn delete_plate(&self, id: PlateId) -> Result<bool, PortError>;

    // ========================================================================
    // Refills
    // ========================================================================

    /// Lists all refills, most recent first
    async fn list_refills(&self) -> Result<Vec<Refill>, PortError>;

    async fn insert_refill(&self, refill: &NewRefill) -> Result<RefillId, PortError>;

    async fn delete_refill(&self, id: RefillId) -> Result<bool, PortError>;

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Sums quantity and amount over every refill of a client
    async fn refill_totals(&self, client_id: ClientId) -> Result<RefillTotals, PortError>;

    /// The refill of a client with the latest date
    async fn last_refill(&self, client_id: ClientId) -> Result<Option<Refill>, PortError>;

    /// Per-plate amount sums for a client's refills, grouped by plate number
    /// in plate-number order and truncated to `limit` groups
    async fn plate_spend(
        &self,
        client_id: ClientId,
        limit: u32,
    ) -> Result<Vec<PlateSpend>, PortError>;
}

/// In-memory mock implementation for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;
    use chrono::Utc;

    use core_kernel::{AdapterHealth, HealthCheckResult, Litres, Money};

    #[derive(Debug, Default)]
    struct MockState {
        next_id: i64,
        clients: BTreeMap<ClientId, Client>,
        plates: BTreeMap<PlateId, Plate>,
        refills: BTreeMap<RefillId, Refill>,
    }

    impl MockState {
        fn next_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }

        fn number_taken(&self, number: &str, except: Option<PlateId>) -> bool {
            self.plates
                .values()
                .any(|p| p.number.as_str() == number && Some(p.id) != except)
        }
    }

    /// In-memory mock implementation of FleetPort
    ///
    /// Mirrors the SQLite adapter: unique plate numbers, ASCII-only
    /// case folding for name lookups, no cascading deletes.
    #[derive(Debug, Default)]
    pub struct MockFleetPort {
        state: RwLock<MockState>,
    }

    impl MockFleetPort {
        /// Creates a new empty mock port
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored clients
        pub async fn client_count(&self) -> usize {
            self.state.read().await.clients.len()
        }

        /// Number of stored plates
        pub async fn plate_count(&self) -> usize {
            self.state.read().await.plates.len()
        }

        /// Number of stored refills
        pub async fn refill_count(&self) -> usize {
            self.state.read().await.refills.len()
        }
    }

    impl DomainPort for MockFleetPort {}

    #[async_trait]
    impl HealthCheckable for MockFleetPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-fleet-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl FleetPort for MockFleetPort {
        async fn get_client(&self, id: ClientId) -> Result<Option<Client>, PortError> {
            Ok(self.state.read().await.clients.get(&id).cloned())
        }

        async fn list_clients(&self) -> Result<Vec<Client>, PortError> {
            let mut clients: Vec<_> = self.state.read().await.clients.values().cloned().collect();
            clients.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(clients)
        }

        async fn find_client_by_name(
            &self,
            name: &str,
            mode: NameMatch,
        ) -> Result<Option<Client>, PortError> {
            let state = self.state.read().await;
            Ok(state
                .clients
                .values()
                .find(|c| mode.matches(&c.name, name))
                .cloned())
        }

        async fn insert_client(&self, draft: &ClientDraft) -> Result<ClientId, PortError> {
            let mut state = self.state.write().await;
            let id = ClientId::new(state.next_id());
            state.clients.insert(id, Client::from_draft(id, draft));
            Ok(id)
        }

        async fn update_client(&self, id: ClientId, draft: &ClientDraft) -> Result<bool, PortError> {
            let mut state = self.state.write().await;
            match state.clients.get_mut(&id) {
                Some(client) => {
                    *client = Client::from_draft(id, draft);
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn delete_client(&self, id: ClientId) -> Result<bool, PortError> {
            Ok(self.state.write().await.clients.remove(&id).is_some())
        }

        async fn get_plate(&self, id: PlateId) -> Result<Option<Plate>, PortError> {
            Ok(self.state.read().await.plates.get(&id).cloned())
        }

        async fn list_plates(&self) -> Result<Vec<Plate>, PortError> {
            let mut plates: Vec<_> = self.state.read().await.plates.values().cloned().collect();
            plates.sort_by(|a, b| a.number.cmp(&b.number));
            Ok(plates)
        }

        async fn plates_for_client(&self, client_id: ClientId) -> Result<Vec<Plate>, PortError> {
            let mut plates: Vec<_> = self
                .state
                .read()
                .await
                .plates
                .values()
                .filter(|p| p.client_id == client_id)
                .cloned()
                .collect();
            plates.sort_by(|a, b| a.number.cmp(&b.number));
            Ok(plates)
        }

        async fn find_plate_by_number(&self, number: &str) -> Result<Option<Plate>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .plates
                .values()
                .find(|p| p.number.as_str() == number)
                .cloned())
        }

        async fn insert_plate(&self, draft: &PlateDraft) -> Result<PlateId, PortError> {
            let mut state = self.state.write().await;
            if state.number_taken(draft.number.as_str(), None) {
                return Err(PortError::conflict(format!(
                    "plate number '{}' already exists",
                    draft.number
                )));
            }
            let id = PlateId::new(state.next_id());
            state.plates.insert(id, Plate::from_draft(id, draft));
            Ok(id)
        }

        async fn update_plate(&self, id: PlateId, draft: &PlateDraft) -> Result<bool, PortError> {
            let mut state = self.state.write().await;
            if !state.plates.contains_key(&id) {
                return Ok(false);
            }
            if state.number_taken(draft.number.as_str(), Some(id)) {
                return Err(PortError::conflict(format!(
                    "plate number '{}' already exists",
                    draft.number
                )));
            }
            state.plates.insert(id, Plate::from_draft(id, draft));
            Ok(true)
        }

        async fn delete_plate(&self, id: PlateId) -> Result<bool, PortError> {
            Ok(self.state.write().await.plates.remove(&id).is_some())
        }

        async fn list_refills(&self) -> Result<Vec<Refill>, PortError> {
            let mut refills: Vec<_> = self.state.read().await.refills.values().cloned().collect();
            refills.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
            Ok(refills)
        }

        async fn insert_refill(&self, refill: &NewRefill) -> Result<RefillId, PortError> {
            let mut state = self.state.write().await;
            let id = RefillId::new(state.next_id());
            state.refills.insert(id, Refill::from_new(id, refill));
            Ok(id)
        }

        async fn delete_refill(&self, id: RefillId) -> Result<bool, PortError> {
            Ok(self.state.write().await.refills.remove(&id).is_some())
        }

        async fn refill_totals(&self, client_id: ClientId) -> Result<RefillTotals, PortError> {
            let state = self.state.read().await;
            let refills: Vec<_> = state
                .refills
                .values()
                .filter(|r| r.client_id == client_id)
                .collect();
            Ok(RefillTotals {
                litres: refills.iter().map(|r| r.quantity).sum::<Litres>(),
                amount: refills.iter().map(|r| r.amount).sum::<Money>(),
                count: refills.len() as u64,
            })
        }

        async fn last_refill(&self, client_id: ClientId) -> Result<Option<Refill>, PortError> {
            let state = self.state.read().await;
            Ok(state
                .refills
                .values()
                .filter(|r| r.client_id == client_id)
                .max_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)))
                .cloned())
        }

        async fn plate_spend(
            &self,
            client_id: ClientId,
            limit: u32,
        ) -> Result<Vec<PlateSpend>, PortError> {
            let state = self.state.read().await;
            let mut groups: BTreeMap<String, Money> = BTreeMap::new();
            for refill in state.refills.values().filter(|r| r.client_id == client_id) {
                // inner join: refills whose plate is gone drop out
                if let Some(plate) = state.plates.get(&refill.plate_id) {
                    *groups.entry(plate.number.to_string()).or_default() += refill.amount;
                }
            }
            Ok(groups
                .into_iter()
                .take(limit as usize)
                .map(|(number, total)| PlateSpend { number, total })
                .collect())
        }
    }
}
