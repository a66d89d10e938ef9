//! Error types for the snowhaus crate
//!
//! This module contains all error types that can be returned by snowhaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowHausError {
    #[error("Dialect not found: {0}")]
    DialectNotFound(String),

    #[error("Dialect already registered: {0}")]
    DialectAlreadyRegistered(String),

    #[error("Catalog query error: {0}")]
    Catalog(String),

    #[error("Type mapping error: {0}")]
    TypeMapping(#[from] type_mapping::TypeMappingError),

    #[error("Variant error: {0}")]
    Variant(#[from] variant_codec::VariantError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
