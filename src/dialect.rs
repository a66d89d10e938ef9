//! The dialect contract a host ORM consumes
//!
//! A host resolves a dialect by name from the [`DialectRegistry`](crate::DialectRegistry)
//! and calls into it while building tables and running migrations.

use async_trait::async_trait;
use type_mapping::{StructField, TypeMappingError};

#[async_trait]
pub trait Dialect: Send + Sync + std::fmt::Debug {
    /// Returns the dialect name
    fn name(&self) -> &'static str;

    /// Bind variable placeholder for the parameter at `index`
    fn bind_var(&self, _index: usize) -> String {
        "?".to_string()
    }

    /// Quote an identifier, doubling embedded quotes
    fn quote(&self, key: &str) -> String {
        format!("\"{}\"", key.replace('"', "\"\""))
    }

    /// Resolve the column type for a field.
    ///
    /// May record a derived `AUTO_INCREMENT` tag on the field.
    fn try_data_type_of(&self, field: &mut StructField) -> Result<String, TypeMappingError>;

    /// Resolve the column type for a field, halting on unmappable types.
    ///
    /// # Panics
    ///
    /// Panics when the field's kind has no column type in this dialect. That is
    /// a schema-definition bug; carrying on would create a wrongly typed column.
    fn data_type_of(&self, field: &mut StructField) -> String {
        match self.try_data_type_of(field) {
            Ok(sql_type) => sql_type,
            Err(e) => panic!("{}", e),
        }
    }

    /// Does the table exist in the current schema. Errors read as `false`.
    async fn has_table(&self, table_name: &str) -> bool;

    /// Does the column exist on the table. Errors read as `false`.
    async fn has_column(&self, table_name: &str, column_name: &str) -> bool;

    /// Does the named index or constraint exist on the table. Errors read as `false`.
    async fn has_index(&self, table_name: &str, index_name: &str) -> bool;

    /// Name of the connected database, empty when unknown
    async fn current_database(&self) -> String;

    fn supports_last_insert_id(&self) -> bool {
        false
    }
}
