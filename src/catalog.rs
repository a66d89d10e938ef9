//! Catalog existence checks
//!
//! Read-only INFORMATION_SCHEMA lookups used during schema migration. Every
//! failure is logged and reported as "does not exist": a migration that then
//! tries to create an object that is already there fails loudly on its own.

use async_trait::async_trait;
use type_mapping::DriverValue;

use crate::errors::SnowHausError;

pub const CURRENT_DATABASE_SQL: &str = "SELECT CURRENT_DATABASE()";
pub const CURRENT_SCHEMA_SQL: &str = "SELECT CURRENT_SCHEMA()";
pub const TABLE_EXISTS_SQL: &str =
    "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE table_schema = ? AND table_name = ?";
pub const COLUMN_EXISTS_SQL: &str = "SELECT COUNT(*) FROM INFORMATION_SCHEMA.COLUMNS WHERE table_schema = ? AND table_name = ? AND column_name = ?";
pub const INDEX_EXISTS_SQL: &str = "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLE_CONSTRAINTS WHERE table_schema = ? AND table_name = ? AND constraint_name = ?";

/// Database handle supplied by the host
#[async_trait]
pub trait CatalogExecutor: Send + Sync {
    /// Run a parameterized query and return the first column of the first row
    async fn query_scalar(
        &self,
        sql: &str,
        params: &[DriverValue],
    ) -> Result<DriverValue, SnowHausError>;
}

/// Existence checks over a borrowed executor
pub struct Catalog<'a> {
    executor: &'a dyn CatalogExecutor,
}

impl<'a> Catalog<'a> {
    pub fn new(executor: &'a dyn CatalogExecutor) -> Self {
        Self { executor }
    }

    pub async fn current_database(&self) -> Option<String> {
        self.scalar_text(CURRENT_DATABASE_SQL).await
    }

    pub async fn current_schema(&self) -> Option<String> {
        self.scalar_text(CURRENT_SCHEMA_SQL).await
    }

    pub async fn table_exists(&self, schema: &str, table: &str) -> bool {
        self.count_positive(TABLE_EXISTS_SQL, &[DriverValue::from(schema), DriverValue::from(table)])
            .await
    }

    pub async fn column_exists(&self, schema: &str, table: &str, column: &str) -> bool {
        self.count_positive(
            COLUMN_EXISTS_SQL,
            &[DriverValue::from(schema), DriverValue::from(table), DriverValue::from(column)],
        )
        .await
    }

    pub async fn index_exists(&self, schema: &str, table: &str, index: &str) -> bool {
        self.count_positive(
            INDEX_EXISTS_SQL,
            &[DriverValue::from(schema), DriverValue::from(table), DriverValue::from(index)],
        )
        .await
    }

    async fn count_positive(&self, sql: &str, params: &[DriverValue]) -> bool {
        trace_log!("catalog query: {} {:?}", sql, params);
        match self.executor.query_scalar(sql, params).await {
            Ok(value) => match value.as_i64() {
                Some(count) => count > 0,
                None => {
                    tracing::warn!("catalog count returned a non-numeric value: {:?}", value);
                    false
                }
            },
            Err(e) => {
                tracing::warn!("catalog query failed, assuming object is missing: {}", e);
                false
            }
        }
    }

    async fn scalar_text(&self, sql: &str) -> Option<String> {
        trace_log!("catalog query: {}", sql);
        match self.executor.query_scalar(sql, &[]).await {
            Ok(DriverValue::Text(text)) if !text.is_empty() => Some(text),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("catalog query `{}` failed: {}", sql, e);
                None
            }
        }
    }
}
