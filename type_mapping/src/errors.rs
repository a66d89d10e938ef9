use thiserror::Error;

/// Schema-definition errors raised while resolving a column type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeMappingError {
    #[error("invalid sql type {type_name} ({kind}) for {dialect}")]
    UnsupportedType {
        type_name: String,
        kind: String,
        dialect: &'static str,
    },
}
