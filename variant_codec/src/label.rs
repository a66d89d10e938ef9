//! Intent labels for semi-structured columns

/// What a caller means a semi-structured column to hold.
///
/// The label never changes how a value is encoded. It only documents intent
/// and hints at the Snowflake type a schema generator could choose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VariantLabel {
    #[default]
    Variant,
    Object,
    Array,
}

impl VariantLabel {
    pub fn column_type_hint(&self) -> &'static str {
        match self {
            VariantLabel::Variant => "VARIANT",
            VariantLabel::Object => "OBJECT",
            VariantLabel::Array => "ARRAY",
        }
    }
}
