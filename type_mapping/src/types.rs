//! Driver value definitions
//!
//! This module provides the raw value representation exchanged with a
//! Snowflake driver, plus the two-method conversion contract that column
//! wrappers implement.

use std::collections::HashMap;

/// Raw column or parameter value as seen by a Snowflake driver
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Text(String),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Decimal(String), // NUMBER columns arrive as text to preserve precision
    Boolean(bool),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Array(Vec<DriverValue>),
    Record(HashMap<String, DriverValue>),
    Null,
}

impl DriverValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Borrow the text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DriverValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read the value as a whole number.
    ///
    /// Snowflake drivers report `COUNT(*)` as NUMBER, which depending on the
    /// driver shows up as an integer, a decimal string, a float or plain text.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DriverValue::SmallInt(v) => Some(i64::from(*v)),
            DriverValue::Integer(v) => Some(i64::from(*v)),
            DriverValue::BigInt(v) => Some(*v),
            DriverValue::Float(v) if v.is_finite() => Some(v.trunc() as i64),
            DriverValue::Decimal(s) | DriverValue::Text(s) => parse_whole_number(s),
            DriverValue::Json(serde_json::Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
            _ => None,
        }
    }
}

fn parse_whole_number(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    trimmed.parse::<i64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    })
}

/// Produce the outbound representation of a column wrapper
pub trait ToDriverValue {
    fn to_driver_value(&self) -> DriverValue;
}

/// Populate a column wrapper from whatever the driver returned
pub trait ScanDriverValue {
    type Error;

    fn scan(&mut self, raw: DriverValue) -> Result<(), Self::Error>;
}

impl From<String> for DriverValue {
    fn from(val: String) -> Self {
        DriverValue::Text(val)
    }
}

impl From<&str> for DriverValue {
    fn from(val: &str) -> Self {
        DriverValue::Text(val.to_string())
    }
}

impl From<i16> for DriverValue {
    fn from(val: i16) -> Self {
        DriverValue::SmallInt(val)
    }
}

impl From<i32> for DriverValue {
    fn from(val: i32) -> Self {
        DriverValue::Integer(val)
    }
}

impl From<i64> for DriverValue {
    fn from(val: i64) -> Self {
        DriverValue::BigInt(val)
    }
}

impl From<f64> for DriverValue {
    fn from(val: f64) -> Self {
        DriverValue::Float(val)
    }
}

impl From<bool> for DriverValue {
    fn from(val: bool) -> Self {
        DriverValue::Boolean(val)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(val: Vec<u8>) -> Self {
        DriverValue::Bytes(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DriverValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        DriverValue::Timestamp(val)
    }
}

impl From<serde_json::Value> for DriverValue {
    fn from(val: serde_json::Value) -> Self {
        DriverValue::Json(val)
    }
}

impl<T> From<Option<T>> for DriverValue
where
    T: Into<DriverValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => DriverValue::Null,
        }
    }
}
