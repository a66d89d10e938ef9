//! Validation utilities for type mapping
//!
//! Content sniffing used when a byte sequence might already hold JSON text.

use serde::de::IgnoredAny;

/// Check whether the bytes form one complete JSON document
pub fn is_json(bytes: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(bytes).is_ok()
}
