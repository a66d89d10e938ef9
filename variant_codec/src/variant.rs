//! The Variant wrapper
//!
//! Buffer invariant: once set, the bytes are a JSON document. `set` leaves the
//! previous buffer alone when encoding fails, and `get` never touches it.

use std::borrow::Cow;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use type_mapping::{marshal_driver_value, DriverValue, ScanDriverValue, ToDriverValue};

use crate::errors::VariantError;
use crate::label::VariantLabel;

/// JSON-encoded value stored in a single semi-structured column
///
/// Equality compares the stored document only; the label is a column hint.
#[derive(Debug, Clone, Default)]
pub struct Variant {
    value: Vec<u8>,
    label: VariantLabel,
}

impl Variant {
    /// Create a variant holding the JSON encoding of `value`
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self, VariantError> {
        let mut variant = Self::default();
        variant.set(value)?;
        Ok(variant)
    }

    /// Same as [`Variant::new`], labelled as an object column
    pub fn object<T: Serialize + ?Sized>(value: &T) -> Result<Self, VariantError> {
        Ok(Self::new(value)?.with_label(VariantLabel::Object))
    }

    /// Same as [`Variant::new`], labelled as an array column
    pub fn array<T: Serialize + ?Sized>(value: &T) -> Result<Self, VariantError> {
        Ok(Self::new(value)?.with_label(VariantLabel::Array))
    }

    pub fn with_label(mut self, label: VariantLabel) -> Self {
        self.label = label;
        self
    }

    pub fn label(&self) -> VariantLabel {
        self.label
    }

    /// Replace the stored document with the encoding of `value`
    pub fn set<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), VariantError> {
        self.value = serde_json::to_vec(value).map_err(VariantError::Encode)?;
        Ok(())
    }

    /// Decode the stored document into a new `T`
    pub fn get<T: DeserializeOwned>(&self) -> Result<T, VariantError> {
        serde_json::from_slice(&self.value).map_err(VariantError::Decode)
    }

    /// Decode the stored document into an existing destination.
    ///
    /// The destination is only overwritten when decoding succeeds.
    pub fn get_into<T: DeserializeOwned>(&self, destination: &mut T) -> Result<(), VariantError> {
        *destination = self.get()?;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Stored document as text, with invalid UTF-8 replaced by U+FFFD
    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Variant {}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str_lossy())
    }
}

impl ToDriverValue for Variant {
    fn to_driver_value(&self) -> DriverValue {
        DriverValue::Text(self.to_string())
    }
}

impl ScanDriverValue for Variant {
    type Error = VariantError;

    /// Text is assumed to already be JSON and is kept verbatim; every other
    /// representation is re-encoded so the buffer stays JSON.
    fn scan(&mut self, raw: DriverValue) -> Result<(), VariantError> {
        self.value = match raw {
            DriverValue::Text(text) => text.into_bytes(),
            other => marshal_driver_value(&other).map_err(VariantError::Encode)?,
        };
        Ok(())
    }
}
