//! Database connection pool management
//!
//! SQLite pools for file-backed and in-memory databases, plus the embedded
//! schema migrations.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the SQLite connection pool
pub type DatabasePool = SqlitePool;

/// URL of a private in-memory database
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("sqlite://fleet.db")
///     .max_connections(5)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Maximum lifetime of a connection; `None` keeps connections forever
    pub max_lifetime: Option<Duration>,
    /// Idle timeout before closing a connection; `None` never closes idle ones
    pub idle_timeout: Option<Duration>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string (e.g., "sqlite://fleet.db")
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            max_lifetime: Some(Duration::from_secs(30 * 60)),
            idle_timeout: Some(Duration::from_secs(10 * 60)),
        }
    }

    /// Configuration for a private in-memory database
    ///
    /// Every SQLite in-memory connection is its own database, so the pool is
    /// pinned to one connection that is never recycled.
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            max_lifetime: None,
            idle_timeout: None,
        }
    }

    /// Sets the maximum number of connections in the pool
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections to maintain
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout duration
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the maximum lifetime of a connection
    pub fn max_lifetime(mut self, lifetime: Option<Duration>) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    /// Sets the idle timeout before closing a connection
    pub fn idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Returns true if the URL points at an in-memory database
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://fleet.db")
    }
}

/// Creates a database connection pool with the given configuration
///
/// The database file is created if missing. Foreign keys are switched off on
/// every connection so deletes never cascade or fail on dangling children.
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the URL is invalid or the
/// pool cannot be opened
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::{DatabaseConfig, create_pool};
///
/// let pool = create_pool(DatabaseConfig::new("sqlite://fleet.db")).await?;
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        max_connections = config.max_connections,
        in_memory = config.is_in_memory(),
        "Creating database pool"
    );

    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(config.connect_timeout)
        .max_lifetime(config.max_lifetime)
        .idle_timeout(config.idle_timeout)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}

/// Applies the embedded schema migrations
///
/// Already-applied migrations are skipped, so this is safe on every start.
pub async fn migrate(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Opens a migrated in-memory database
pub async fn create_in_memory_pool() -> Result<DatabasePool, DatabaseError> {
    let pool = create_pool(DatabaseConfig::in_memory()).await?;
    migrate(&pool).await?;
    Ok(pool)
}
