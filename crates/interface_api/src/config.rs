//! API configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://fleet.db";

/// API configuration
///
/// Loaded from `API_`-prefixed environment variables over the defaults
/// below. `DATABASE_URL` is honoured when `API_DATABASE_URL` is unset.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// SQLite database URL
    pub database_url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Log level, used when `RUST_LOG` is not set
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Insert the demo clients and plates into an empty database at startup
    pub seed_demo_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            log_level: "info".to_string(),
            log_json: false,
            seed_demo_data: false,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Environment::with_prefix("API").try_parsing(true),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    /// Loads configuration from an environment source, with an optional
    /// fallback database URL
    pub fn load(env: Environment, database_url: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default(
                "database_url",
                database_url.unwrap_or(defaults.database_url),
            )?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
