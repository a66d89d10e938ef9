//! # Configuration Management for snowhaus
//!
//! This crate provides the connection and dialect settings used when wiring
//! the Snowflake dialect into a host ORM.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{ConnectionConfig, DialectConfig};
//!
//! let connection = ConnectionConfig::new(
//!     "xy12345.eu-west-1".to_string(), "loader".to_string(), "secret".to_string(),
//!     "ANALYTICS".to_string(), "PUBLIC".to_string(), "LOAD_WH".to_string(),
//! );
//!
//! let dialect = DialectConfig::default().with_default_schema("PUBLIC");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [connection]
//! account = "xy12345.eu-west-1"
//! username = "loader"
//! password = "secret"
//! database = "ANALYTICS"
//! schema = "PUBLIC"
//! warehouse = "LOAD_WH"
//! role = "LOADER"
//!
//! [dialect]
//! name = "snowflake"
//! default_schema = "PUBLIC"
//! ```
//!
//! The `[connection]` section can be left out when the host owns the driver
//! handle and only needs dialect settings.
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from snowhaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./snowhaus.toml";
const CONFIG_PATH_VAR: &str = "SNOWHAUS_CONFIG";
const DEFAULT_DIALECT_NAME: &str = "snowflake";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub connection: Option<ConnectionConfig>,
    #[serde(default)]
    pub dialect: DialectConfig,
}

/// Snowflake connection settings, rendered into a driver DSN
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub account: String,
    pub username: String,
    pub password: String,
    pub database: String,
    pub schema: String,
    pub warehouse: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Dialect registration settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DialectConfig {
    /// Name the dialect is registered under
    #[serde(default = "default_dialect_name")]
    pub name: String,

    /// Schema used by existence checks instead of asking for CURRENT_SCHEMA()
    #[serde(default)]
    pub default_schema: Option<String>,
}

fn default_dialect_name() -> String {
    DEFAULT_DIALECT_NAME.to_string()
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            name: default_dialect_name(),
            default_schema: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified in .env file as {} or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(connection) = &self.connection {
            connection.validate()?;
        }

        if self.dialect.name.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "Dialect name cannot be empty".to_string(),
            ));
        }
        if let Some(schema) = &self.dialect.default_schema {
            if schema.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "Dialect default_schema cannot be blank when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl ConnectionConfig {
    /// Create a new connection configuration
    pub fn new(
        account: String,
        username: String,
        password: String,
        database: String,
        schema: String,
        warehouse: String,
    ) -> Self {
        Self {
            account,
            username,
            password,
            database,
            schema,
            warehouse,
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("account", &self.account),
            ("username", &self.username),
            ("database", &self.database),
            ("schema", &self.schema),
            ("warehouse", &self.warehouse),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Connection {} cannot be empty",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Build driver DSN: `user:password@account/database/schema?warehouse=..&role=..`
    pub fn dsn(&self) -> String {
        let mut dsn = format!(
            "{}:{}@{}/{}/{}?warehouse={}",
            self.username, self.password, self.account, self.database, self.schema, self.warehouse
        );
        if let Some(role) = &self.role {
            dsn.push_str("&role=");
            dsn.push_str(role);
        }
        dsn
    }
}

impl DialectConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }
}
