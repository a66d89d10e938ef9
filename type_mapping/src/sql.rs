//! SQL type conversion utilities
//!
//! This module classifies Rust types into reflected kinds and resolves the
//! Snowflake column type for a field.

use crate::errors::TypeMappingError;
use crate::field::{parse_field_for_dialect, FieldKind, FloatKind, IntKind, StructField, StructKind};
use crate::validate::is_json;

pub const DIALECT_NAME: &str = "snowflake";

/// The one semi-structured type used for structs, maps and sequences
pub const SEMI_STRUCTURED_TYPE: &str = "VARIANT";

/// Exclusive upper bound for a bounded VARCHAR
pub const MAX_VARCHAR_SIZE: usize = 65532;

/// Resolve the Snowflake column type for a field.
///
/// An explicit `TYPE` tag wins outright. Auto-increment eligible integer fields
/// get `AUTO_INCREMENT` recorded on their tag settings; no other mutation
/// happens. Kinds with no Snowflake column type are reported as
/// `TypeMappingError::UnsupportedType`.
///
/// Every integer width maps to `INTEGER`, which Snowflake stores as
/// `NUMBER(38,0)`. `i128`/`u128` values that need 39 digits (up to `u128::MAX`)
/// do not fit; declare an explicit `TYPE` for such columns.
pub fn snowflake_data_type(field: &mut StructField) -> Result<String, TypeMappingError> {
    let parsed = parse_field_for_dialect(field);

    let sql_type = match parsed.sql_type {
        Some(declared) => declared,
        None => {
            // Unbounded text costs nothing extra on Snowflake, so only bound on request
            let size = if field.tags.contains("SIZE") { parsed.size } else { 0 };
            infer_sql_type(field, size)?
        }
    };

    if parsed.additional_type.trim().is_empty() {
        Ok(sql_type)
    } else {
        Ok(format!("{} {}", sql_type, parsed.additional_type))
    }
}

fn infer_sql_type(field: &mut StructField, size: usize) -> Result<String, TypeMappingError> {
    let kind = field.kind.clone();

    let sql_type = match kind {
        FieldKind::Bool => "BOOLEAN".to_string(),
        FieldKind::Int(_) => {
            if field.can_auto_increment() {
                field.tags.set("AUTO_INCREMENT", "AUTO_INCREMENT");
                "INTEGER AUTOINCREMENT".to_string()
            } else {
                "INTEGER".to_string()
            }
        }
        FieldKind::Float(_) => "NUMERIC".to_string(),
        FieldKind::String => {
            if size > 0 && size < MAX_VARCHAR_SIZE {
                format!("VARCHAR({})", size)
            } else {
                "TEXT".to_string()
            }
        }
        FieldKind::Struct(StructKind::TimestampTz) => "TIMESTAMP_TZ".to_string(),
        FieldKind::Struct(StructKind::Named) | FieldKind::Map => SEMI_STRUCTURED_TYPE.to_string(),
        ref seq if seq.is_sequence() => {
            if !seq.is_byte_sequence() {
                SEMI_STRUCTURED_TYPE.to_string()
            } else if field.value.as_deref().is_some_and(is_json) {
                SEMI_STRUCTURED_TYPE.to_string()
            } else {
                "BINARY".to_string()
            }
        }
        other => {
            return Err(TypeMappingError::UnsupportedType {
                type_name: field.type_name.clone(),
                kind: other.name().to_string(),
                dialect: DIALECT_NAME,
            })
        }
    };

    Ok(sql_type)
}

/// Classify a Rust type name into its reflected kind.
///
/// Nullable and smart-pointer wrappers (`Option`, `Box`, `Arc`, `Rc`) and
/// references are looked through. Unrecognised named types are treated as
/// structs.
pub fn rust_type_to_field_kind(rust_type: &str) -> FieldKind {
    let ty = strip_reference(rust_type.trim());

    if ty == "()" {
        return FieldKind::Unit;
    }
    if ty.starts_with("*const") || ty.starts_with("*mut") {
        return FieldKind::Pointer;
    }
    if ty.starts_with("fn(")
        || ty.starts_with("fn (")
        || ty.starts_with("unsafe ")
        || ty.starts_with("extern ")
    {
        return FieldKind::Function;
    }
    if let Some(bound) = ty.strip_prefix("dyn ").or_else(|| ty.strip_prefix("impl ")) {
        return if is_fn_trait(bound) {
            FieldKind::Function
        } else {
            FieldKind::TraitObject
        };
    }
    if let Some(inner) = ty.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        let parts = split_top_level(inner, ';');
        return match parts.as_slice() {
            [elem, len] => FieldKind::Array(
                Box::new(rust_type_to_field_kind(elem)),
                len.trim().parse().unwrap_or(0),
            ),
            _ => FieldKind::Slice(Box::new(rust_type_to_field_kind(inner))),
        };
    }
    if ty.starts_with('(') {
        // Tuples serialize as JSON arrays; keep them semi-structured
        return FieldKind::Struct(StructKind::Named);
    }

    let (path, args) = split_generics(ty);
    let base = path.rsplit("::").next().unwrap_or(path).trim();
    let type_args: Vec<&str> = args
        .map(|a| {
            split_top_level(a, ',')
                .into_iter()
                .filter(|arg| !arg.starts_with('\''))
                .collect()
        })
        .unwrap_or_default();

    match base {
        "bool" => FieldKind::Bool,
        "i8" => FieldKind::Int(IntKind::I8),
        "i16" => FieldKind::Int(IntKind::I16),
        "i32" => FieldKind::Int(IntKind::I32),
        "i64" => FieldKind::Int(IntKind::I64),
        "i128" => FieldKind::Int(IntKind::I128),
        "isize" => FieldKind::Int(IntKind::Isize),
        "u8" => FieldKind::Int(IntKind::U8),
        "u16" => FieldKind::Int(IntKind::U16),
        "u32" => FieldKind::Int(IntKind::U32),
        "u64" => FieldKind::Int(IntKind::U64),
        "u128" => FieldKind::Int(IntKind::U128),
        "usize" => FieldKind::Int(IntKind::Usize),
        "f32" => FieldKind::Float(FloatKind::F32),
        "f64" => FieldKind::Float(FloatKind::F64),
        "String" | "str" | "char" => FieldKind::String,
        "Option" | "Box" | "Arc" | "Rc" => type_args
            .first()
            .map(|inner| rust_type_to_field_kind(inner))
            .unwrap_or(FieldKind::Struct(StructKind::Named)),
        "Cow" => type_args
            .last()
            .map(|inner| rust_type_to_field_kind(inner))
            .unwrap_or(FieldKind::String),
        "Vec" | "VecDeque" | "LinkedList" | "HashSet" | "BTreeSet" | "IndexSet" => {
            let elem = type_args
                .first()
                .map(|inner| rust_type_to_field_kind(inner))
                .unwrap_or(FieldKind::Struct(StructKind::Named));
            FieldKind::Slice(Box::new(elem))
        }
        "Bytes" | "BytesMut" | "ByteBuf" => FieldKind::Slice(Box::new(FieldKind::Int(IntKind::U8))),
        "HashMap" | "BTreeMap" | "IndexMap" | "Map" => FieldKind::Map,
        "DateTime" | "OffsetDateTime" | "Zoned" => FieldKind::Struct(StructKind::TimestampTz),
        "Sender" | "Receiver" | "SyncSender" | "UnboundedSender" | "UnboundedReceiver" => {
            FieldKind::Channel
        }
        "Fn" | "FnMut" | "FnOnce" => FieldKind::Function,
        _ => FieldKind::Struct(StructKind::Named),
    }
}

fn is_fn_trait(bound: &str) -> bool {
    let bound = bound.trim_start();
    ["Fn(", "FnMut(", "FnOnce(", "Fn (", "FnMut (", "FnOnce ("]
        .iter()
        .any(|prefix| bound.starts_with(prefix))
}

/// Drop leading `&`, `&'a` and `&mut`
fn strip_reference(mut ty: &str) -> &str {
    while let Some(rest) = ty.strip_prefix('&') {
        ty = rest.trim_start();
        if ty.starts_with('\'') {
            ty = ty
                .find(char::is_whitespace)
                .map(|i| ty[i..].trim_start())
                .unwrap_or("");
        }
        if let Some(rest) = ty.strip_prefix("mut ") {
            ty = rest.trim_start();
        }
    }
    ty
}

/// Split `Path<Args>` into the path and the raw argument list
fn split_generics(ty: &str) -> (&str, Option<&str>) {
    match (ty.find('<'), ty.ends_with('>')) {
        (Some(open), true) => (ty[..open].trim(), Some(&ty[open + 1..ty.len() - 1])),
        _ => (ty, None),
    }
}

/// Split on `sep` outside of any `<>`, `()` or `[]` nesting
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            c if c == sep && depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(s[start..].trim());
    parts.into_iter().filter(|p| !p.is_empty()).collect()
}
