//! Error types for variant encoding and decoding

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VariantError {
    #[error("Variant encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Variant decode error: {0}")]
    Decode(#[source] serde_json::Error),
}
