//! Convenience re-exports for common snowhaus usage
//!
//! # Example
//!
//! ```rust
//! use snowhaus::prelude::*;
//! ```

// Dialect and registry
pub use crate::catalog::{Catalog, CatalogExecutor};
pub use crate::core::DialectRegistry;
pub use crate::dialect::Dialect;
pub use crate::errors::SnowHausError;
pub use crate::snowflake::Snowflake;

// Centralized config
pub use config::{AppConfig, ConnectionConfig, DialectConfig};

// Field model and driver values
pub use type_mapping::{
    DriverValue, FieldKind, ScanDriverValue, StructField, TagSettings, ToDriverValue,
};

// Semi-structured values
pub use variant_codec::{Variant, VariantError, VariantLabel};

pub use async_trait::async_trait;
