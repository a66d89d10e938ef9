//! Unified type mapping between Rust field descriptors and Snowflake
//! This crate provides the field model, kind classification and column type
//! resolution used across the snowhaus ecosystem

pub mod errors;
pub mod field;
pub mod serialize;
pub mod sql;
pub mod types;
pub mod validate;

pub use errors::TypeMappingError;
pub use field::{
    parse_field_for_dialect, FieldKind, FloatKind, IntKind, ParsedField, StructField, StructKind,
    TagSettings,
};
pub use serialize::marshal_driver_value;
pub use sql::{
    rust_type_to_field_kind, snowflake_data_type, DIALECT_NAME, MAX_VARCHAR_SIZE,
    SEMI_STRUCTURED_TYPE,
};
pub use types::{DriverValue, ScanDriverValue, ToDriverValue};
pub use validate::is_json;
