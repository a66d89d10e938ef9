//! Snowflake dialect
//!
//! Column types come from `type_mapping::snowflake_data_type`; existence checks
//! go through the host-supplied [`CatalogExecutor`].

use std::sync::Arc;

use async_trait::async_trait;
use config::DialectConfig;
use type_mapping::{snowflake_data_type, StructField, TypeMappingError, DIALECT_NAME};

use crate::catalog::{Catalog, CatalogExecutor};
use crate::dialect::Dialect;

#[derive(Clone, Default)]
pub struct Snowflake {
    executor: Option<Arc<dyn CatalogExecutor>>,
    default_schema: Option<String>,
}

impl std::fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snowflake")
            .field("has_executor", &self.has_executor())
            .field("default_schema", &self.default_schema)
            .finish()
    }
}

impl Snowflake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DialectConfig) -> Self {
        Self {
            executor: None,
            default_schema: config.default_schema.clone(),
        }
    }

    pub fn with_executor(mut self, executor: Arc<dyn CatalogExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Attach the database handle used by existence checks
    pub fn set_executor(&mut self, executor: Arc<dyn CatalogExecutor>) {
        self.executor = Some(executor);
    }

    pub fn has_executor(&self) -> bool {
        self.executor.is_some()
    }

    /// Use a fixed schema instead of asking the session for CURRENT_SCHEMA()
    pub fn with_default_schema(mut self, schema: impl Into<String>) -> Self {
        self.default_schema = Some(schema.into());
        self
    }

    fn catalog(&self) -> Option<Catalog<'_>> {
        match &self.executor {
            Some(executor) => Some(Catalog::new(executor.as_ref())),
            None => {
                tracing::warn!("snowflake dialect has no catalog executor attached");
                None
            }
        }
    }

    async fn resolve_schema(&self, catalog: &Catalog<'_>) -> Option<String> {
        match &self.default_schema {
            Some(schema) => Some(schema.clone()),
            None => catalog.current_schema().await,
        }
    }
}

#[async_trait]
impl Dialect for Snowflake {
    fn name(&self) -> &'static str {
        DIALECT_NAME
    }

    fn try_data_type_of(&self, field: &mut StructField) -> Result<String, TypeMappingError> {
        let sql_type = snowflake_data_type(field)?;
        debug_log!("snowflake column {} ({}) -> {}", field.name, field.type_name, sql_type);
        Ok(sql_type)
    }

    async fn has_table(&self, table_name: &str) -> bool {
        let Some(catalog) = self.catalog() else {
            return false;
        };
        let Some(schema) = self.resolve_schema(&catalog).await else {
            return false;
        };
        catalog.table_exists(&schema, table_name).await
    }

    async fn has_column(&self, table_name: &str, column_name: &str) -> bool {
        let Some(catalog) = self.catalog() else {
            return false;
        };
        let Some(schema) = self.resolve_schema(&catalog).await else {
            return false;
        };
        catalog.column_exists(&schema, table_name, column_name).await
    }

    async fn has_index(&self, table_name: &str, index_name: &str) -> bool {
        let Some(catalog) = self.catalog() else {
            return false;
        };
        let Some(schema) = self.resolve_schema(&catalog).await else {
            return false;
        };
        catalog.index_exists(&schema, table_name, index_name).await
    }

    async fn current_database(&self) -> String {
        match self.catalog() {
            Some(catalog) => catalog.current_database().await.unwrap_or_default(),
            None => String::new(),
        }
    }

    fn supports_last_insert_id(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_basics() {
        let dialect = Snowflake::new();
        assert_eq!(dialect.name(), "snowflake");
        assert_eq!(dialect.bind_var(1), "?");
        assert_eq!(dialect.bind_var(7), "?");
        assert_eq!(dialect.quote("ID"), "\"ID\"");
        assert_eq!(dialect.quote("we\"ird"), "\"we\"\"ird\"");
        assert!(dialect.supports_last_insert_id());
        assert!(!dialect.has_executor());
    }

    #[test]
    fn test_from_config_keeps_default_schema() {
        let config = DialectConfig::default().with_default_schema("STAGING");
        let dialect = Snowflake::from_config(&config);
        assert_eq!(dialect.default_schema.as_deref(), Some("STAGING"));
        assert!(format!("{:?}", dialect).contains("has_executor: false"));
    }
}
