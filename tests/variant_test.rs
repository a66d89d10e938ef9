//! Integration tests for VARIANT column values
//!
//! Round-trips through the codec and through the driver value/scan contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use snowhaus::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Contact {
    name: String,
    address: String,
    email: Option<String>,
    company: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Widget {
    id: String,
    item: Contact,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn contact() -> Contact {
    Contact {
        name: "Bob A. Fett".to_string(),
        address: "123 Somewhere".to_string(),
        email: None,
        company: "Empire Bounty, Inc".to_string(),
    }
}

#[test]
fn test_round_trip_of_assorted_values() -> anyhow::Result<()> {
    let map: HashMap<String, String> = [("Name", "Bob"), ("Email", "nah@notthere.net")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let decoded: HashMap<String, String> = Variant::new(&map)?.get()?;
    assert_eq!(decoded, map);

    let decoded: Contact = Variant::object(&contact())?.get()?;
    assert_eq!(decoded, contact());

    let list = vec![Some(1.5), None, Some(-2.0)];
    let decoded: Vec<Option<f64>> = Variant::array(&list)?.get()?;
    assert_eq!(decoded, list);

    let widget = Widget {
        id: "w-1".to_string(),
        item: contact(),
        created_at: chrono::DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")?.to_utc(),
    };
    let decoded: Widget = Variant::new(&widget)?.get()?;
    assert_eq!(decoded, widget);

    Ok(())
}

#[test]
fn test_write_then_read_through_driver_contract() -> anyhow::Result<()> {
    // What the host sends as the INSERT parameter...
    let outbound = Variant::object(&contact())?.to_driver_value();
    let DriverValue::Text(text) = outbound.clone() else {
        panic!("expected text, got {:?}", outbound);
    };

    // ...comes back from a VARIANT column as text
    let mut scanned = Variant::default();
    scanned.scan(DriverValue::Text(text.clone()))?;

    assert_eq!(scanned.to_driver_value(), DriverValue::Text(text));
    assert_eq!(scanned.get::<Contact>()?, contact());
    Ok(())
}

#[test]
fn test_scan_text_is_kept_verbatim_even_with_whitespace() -> anyhow::Result<()> {
    let raw = "{\n  \"a\" : 1\n}";
    let mut variant = Variant::default();
    variant.scan(DriverValue::from(raw))?;

    assert_eq!(variant.to_string(), raw);
    assert_eq!(variant.get::<serde_json::Value>()?, json!({"a": 1}));
    Ok(())
}

#[test]
fn test_scan_structured_driver_value() -> anyhow::Result<()> {
    let raw = DriverValue::Array(vec![
        DriverValue::Integer(1),
        DriverValue::Decimal("2.50".to_string()),
        DriverValue::Json(json!({"nested": true})),
        DriverValue::Null,
    ]);

    let mut variant = Variant::default();
    variant.scan(raw)?;

    assert_eq!(
        variant.get::<serde_json::Value>()?,
        json!([1, 2.5, {"nested": true}, null])
    );
    Ok(())
}

#[test]
fn test_decode_error_for_incompatible_destination() -> anyhow::Result<()> {
    let variant = Variant::new(&json!({"name": 3}))?;
    let result = variant.get::<Contact>();

    assert!(matches!(result, Err(VariantError::Decode(_))));
    let converted: SnowHausError = result.unwrap_err().into();
    assert!(converted.to_string().starts_with("Variant error: Variant decode error"));
    Ok(())
}

#[test]
fn test_set_replaces_buffer() -> anyhow::Result<()> {
    let mut variant = Variant::new(&json!([1, 2]))?;
    variant.set(&contact())?;

    assert_eq!(variant.get::<Contact>()?, contact());
    Ok(())
}
