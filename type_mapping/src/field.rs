//! Field descriptors
//!
//! The host ORM builds one `StructField` per mapped struct field. A dialect
//! only reads it, except for the single derived `AUTO_INCREMENT` tag the type
//! mapper may record for later statement generation.

use std::collections::HashMap;
use std::fmt;

/// Integer widths, signed and unsigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl IntKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::I128 => "i128",
            IntKind::Isize => "isize",
            IntKind::U8 => "u8",
            IntKind::U16 => "u16",
            IntKind::U32 => "u32",
            IntKind::U64 => "u64",
            IntKind::U128 => "u128",
            IntKind::Usize => "usize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructKind {
    /// A point in time carrying its offset (`DateTime<Utc>`, `OffsetDateTime`, ...)
    TimestampTz,
    /// Any other struct; stored as nested JSON
    Named,
}

/// Reflected data kind of a field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int(IntKind),
    Float(FloatKind),
    String,
    Struct(StructKind),
    Map,
    Slice(Box<FieldKind>),
    Array(Box<FieldKind>, usize),
    Channel,
    Function,
    Pointer,
    Unit,
    TraitObject,
}

impl FieldKind {
    /// Slice or fixed-size array of any element type
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldKind::Slice(_) | FieldKind::Array(_, _))
    }

    /// Slice or array whose elements are `u8`
    pub fn is_byte_sequence(&self) -> bool {
        match self {
            FieldKind::Slice(elem) | FieldKind::Array(elem, _) => {
                **elem == FieldKind::Int(IntKind::U8)
            }
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Int(kind) => kind.as_str(),
            FieldKind::Float(FloatKind::F32) => "f32",
            FieldKind::Float(FloatKind::F64) => "f64",
            FieldKind::String => "string",
            FieldKind::Struct(_) => "struct",
            FieldKind::Map => "map",
            FieldKind::Slice(_) => "slice",
            FieldKind::Array(_, _) => "array",
            FieldKind::Channel => "channel",
            FieldKind::Function => "function",
            FieldKind::Pointer => "pointer",
            FieldKind::Unit => "unit",
            FieldKind::TraitObject => "trait object",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared tag settings of a field, keyed by upper-cased tag name.
///
/// Mutation contract: a dialect may add exactly one derived key,
/// `AUTO_INCREMENT`, while resolving the column type. Every other key is owned
/// by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSettings {
    settings: HashMap<String, String>,
}

impl TagSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.settings.contains_key(&key.to_uppercase())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_uppercase(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.settings.remove(&key.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for TagSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = TagSettings::new();
        for (key, value) in iter {
            tags.set(key.as_ref(), value.as_ref());
        }
        tags
    }
}

/// Host-produced descriptor of one mapped struct field
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub name: String,
    pub type_name: String,
    pub kind: FieldKind,
    pub is_primary_key: bool,
    pub tags: TagSettings,
    /// Bytes observed on the field, used to sniff JSON in byte sequences
    pub value: Option<Vec<u8>>,
}

impl StructField {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            kind,
            is_primary_key: false,
            tags: TagSettings::new(),
            value: None,
        }
    }

    /// Build a descriptor, classifying the kind from a Rust type name
    pub fn from_rust_type(name: impl Into<String>, type_name: &str) -> Self {
        let kind = crate::sql::rust_type_to_field_kind(type_name);
        Self::new(name, type_name.trim(), kind)
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.set(key, value);
        self
    }

    pub fn with_value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.tags.contains("DEFAULT")
    }

    /// An explicit `AUTO_INCREMENT` tag decides on its own (anything but
    /// `false` enables it); otherwise primary keys without a default qualify.
    pub fn can_auto_increment(&self) -> bool {
        match self.tags.get("AUTO_INCREMENT") {
            Some(value) => !value.trim().eq_ignore_ascii_case("false"),
            None => self.is_primary_key && !self.has_default(),
        }
    }
}

/// Common tag resolution performed before dialect-specific inference
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedField {
    /// Explicit `TYPE` override, used verbatim when present
    pub sql_type: Option<String>,
    /// `SIZE` tag, 0 when absent or unparseable
    pub size: usize,
    /// Modifier appended after the resolved type
    pub additional_type: String,
}

pub fn parse_field_for_dialect(field: &StructField) -> ParsedField {
    let tags = &field.tags;

    let sql_type = tags
        .get("TYPE")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let size = tags
        .get("SIZE")
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut modifiers: Vec<String> = Vec::new();
    if tags.contains("NOT NULL") {
        modifiers.push("NOT NULL".to_string());
    }
    if tags.contains("UNIQUE") {
        modifiers.push("UNIQUE".to_string());
    }
    if let Some(default) = tags.get("DEFAULT") {
        modifiers.push(format!("DEFAULT {}", default.trim()));
    }
    if let Some(extra) = tags.get("ADDITIONAL_TYPE") {
        modifiers.push(extra.trim().to_string());
    }

    let additional_type = modifiers
        .into_iter()
        .filter(|m| !m.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ParsedField {
        sql_type,
        size,
        additional_type,
    }
}
