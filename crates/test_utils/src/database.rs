//! Database Test Utilities
//!
//! Every `TestDatabase` is a private, migrated in-memory SQLite database,
//! so tests never share state and need no external services.

use std::sync::Arc;

use domain_fleet::{FleetPort, FleetService};
use infra_db::{create_in_memory_pool, seed_demo_data, DatabaseError, DatabasePool, SqliteFleetAdapter};

/// A migrated in-memory database with its fleet adapter
pub struct TestDatabase {
    pub pool: DatabasePool,
    adapter: Arc<SqliteFleetAdapter>,
}

impl TestDatabase {
    /// Opens an empty, migrated database
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = create_in_memory_pool().await?;
        let adapter = Arc::new(SqliteFleetAdapter::new(pool.clone()));
        Ok(Self { pool, adapter })
    }

    /// Opens a database pre-loaded with the demo clients and plates
    pub async fn seeded() -> Result<Self, DatabaseError> {
        let db = Self::new().await?;
        seed_demo_data(&db.pool).await?;
        Ok(db)
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// The adapter as a domain port
    pub fn port(&self) -> Arc<dyn FleetPort> {
        self.adapter.clone()
    }

    /// A service wired to this database
    pub fn service(&self) -> FleetService {
        FleetService::new(self.port())
    }

    /// Number of rows in `table`
    pub async fn count(&self, table: &str) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Helper macro for running database tests
///
/// ```rust,ignore
/// db_test!(test_counts_start_at_zero, |db| async move {
///     assert_eq!(db.count("clients").await.unwrap(), 0);
/// });
/// ```
#[macro_export]
macro_rules! db_test {
    ($name:ident, |$db:ident| $body:expr) => {
        #[tokio::test]
        async fn $name() {
            let $db = $crate::database::TestDatabase::new()
                .await
                .expect("Failed to create test database");
            $body.await
        }
    };
}
