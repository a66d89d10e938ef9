//! Semi-structured value wrapper for Snowflake VARIANT columns
//!
//! A [`Variant`] holds one JSON document as bytes. Structs, maps and sequences
//! go in with [`Variant::set`] and come back out with [`Variant::get`]; the
//! driver side talks to it through the `ToDriverValue` / `ScanDriverValue`
//! contract from `type_mapping`.
//!
//! ```
//! use std::collections::HashMap;
//! use variant_codec::Variant;
//!
//! let mut item = HashMap::new();
//! item.insert("name".to_string(), "Bob A. Fett".to_string());
//!
//! let variant = Variant::new(&item).unwrap();
//! let back: HashMap<String, String> = variant.get().unwrap();
//! assert_eq!(back, item);
//! ```

pub mod errors;
pub mod label;
pub mod variant;

pub use errors::VariantError;
pub use label::VariantLabel;
pub use variant::Variant;
