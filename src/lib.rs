//! # snowhaus
//!
//! Snowflake dialect adapter for ORM hosts: column type mapping, catalog
//! existence checks and a JSON codec for VARIANT columns.
//!
//! ## Quick Start
//!
//! ```rust
//! use snowhaus::prelude::*;
//!
//! let mut registry = DialectRegistry::new();
//! snowhaus::init(&mut registry).unwrap();
//!
//! let dialect = registry.get("snowflake").unwrap();
//!
//! let mut id = StructField::from_rust_type("id", "i64").primary_key();
//! assert_eq!(dialect.data_type_of(&mut id), "INTEGER AUTOINCREMENT");
//! assert_eq!(id.tags.get("AUTO_INCREMENT"), Some("AUTO_INCREMENT"));
//!
//! let mut name = StructField::from_rust_type("name", "String").with_tag("SIZE", "36");
//! assert_eq!(dialect.data_type_of(&mut name), "VARCHAR(36)");
//!
//! let item = Variant::new(&serde_json::json!({"name": "Bob A. Fett"})).unwrap();
//! assert_eq!(item.to_driver_value(), DriverValue::Text(r#"{"name":"Bob A. Fett"}"#.into()));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod catalog;
pub mod core;
pub mod dialect;
pub mod errors;
pub mod prelude;
pub mod snowflake;

pub use catalog::{Catalog, CatalogExecutor};
pub use crate::core::DialectRegistry;
pub use dialect::Dialect;
pub use errors::SnowHausError;
pub use snowflake::Snowflake;

pub use config::{AppConfig, ConnectionConfig, DialectConfig};

// Re-export member crates used in the public API
pub use config;
pub use type_mapping;
pub use variant_codec;

pub use async_trait;

/// Register the Snowflake dialect under `"snowflake"`
pub fn init(registry: &mut DialectRegistry) -> Result<(), SnowHausError> {
    init_with_config(registry, &DialectConfig::default())
}

/// Register the Snowflake dialect under the configured name
pub fn init_with_config(
    registry: &mut DialectRegistry,
    config: &DialectConfig,
) -> Result<(), SnowHausError> {
    registry.register(config.name.clone(), Snowflake::from_config(config))
}
