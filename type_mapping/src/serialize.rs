//! Serialization utilities
//!
//! This module renders driver values as JSON, which is how values that did not
//! arrive as text get stored in a semi-structured column.

use crate::types::DriverValue;
use serde::{Serialize, Serializer};
use std::str::FromStr;

impl Serialize for DriverValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DriverValue::Text(s) => serializer.serialize_str(s),
            DriverValue::SmallInt(v) => serializer.serialize_i16(*v),
            DriverValue::Integer(v) => serializer.serialize_i32(*v),
            DriverValue::BigInt(v) => serializer.serialize_i64(*v),
            DriverValue::Float(v) => serializer.serialize_f64(*v),
            DriverValue::Decimal(s) => match serde_json::Number::from_str(s.trim()) {
                Ok(n) => n.serialize(serializer),
                // Keep unparseable decimals as text rather than losing them
                Err(_) => serializer.serialize_str(s),
            },
            DriverValue::Boolean(b) => serializer.serialize_bool(*b),
            DriverValue::Timestamp(ts) => ts.serialize(serializer),
            DriverValue::Bytes(bytes) => serializer.serialize_bytes(bytes),
            DriverValue::Json(value) => value.serialize(serializer),
            DriverValue::Array(items) => serializer.collect_seq(items),
            DriverValue::Record(fields) => serializer.collect_map(fields),
            DriverValue::Null => serializer.serialize_unit(),
        }
    }
}

/// Marshal a driver value into JSON bytes
pub fn marshal_driver_value(value: &DriverValue) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}
