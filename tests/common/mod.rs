//! In-memory catalog used by the integration tests

use std::collections::HashSet;
use std::sync::Mutex;

use snowhaus::catalog::{
    COLUMN_EXISTS_SQL, CURRENT_DATABASE_SQL, CURRENT_SCHEMA_SQL, INDEX_EXISTS_SQL,
    TABLE_EXISTS_SQL,
};
use snowhaus::prelude::*;

#[derive(Default)]
pub struct MockCatalog {
    pub database: Option<String>,
    pub schema: Option<String>,
    pub tables: HashSet<(String, String)>,
    pub columns: HashSet<(String, String, String)>,
    pub constraints: HashSet<(String, String, String)>,
    pub offline: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockCatalog {
    pub fn new(database: &str, schema: &str) -> Self {
        Self {
            database: Some(database.to_string()),
            schema: Some(schema.to_string()),
            ..Default::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn with_table(mut self, schema: &str, table: &str) -> Self {
        self.tables.insert((schema.to_string(), table.to_string()));
        self
    }

    pub fn with_column(mut self, schema: &str, table: &str, column: &str) -> Self {
        self.columns
            .insert((schema.to_string(), table.to_string(), column.to_string()));
        self
    }

    pub fn with_constraint(mut self, schema: &str, table: &str, name: &str) -> Self {
        self.constraints
            .insert((schema.to_string(), table.to_string(), name.to_string()));
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

fn text(params: &[DriverValue], i: usize) -> String {
    params
        .get(i)
        .and_then(DriverValue::as_text)
        .unwrap_or_default()
        .to_string()
}

// Snowflake reports COUNT(*) as NUMBER, which drivers hand back as a decimal string
fn count(found: bool) -> DriverValue {
    DriverValue::Decimal(if found { "1" } else { "0" }.to_string())
}

#[async_trait]
impl CatalogExecutor for MockCatalog {
    async fn query_scalar(
        &self,
        sql: &str,
        params: &[DriverValue],
    ) -> Result<DriverValue, SnowHausError> {
        self.calls.lock().unwrap().push(sql.to_string());

        if self.offline {
            return Err(SnowHausError::Catalog("connection reset by peer".to_string()));
        }

        let value: DriverValue = match sql {
            CURRENT_DATABASE_SQL => self.database.clone().into(),
            CURRENT_SCHEMA_SQL => self.schema.clone().into(),
            TABLE_EXISTS_SQL => count(self.tables.contains(&(text(params, 0), text(params, 1)))),
            COLUMN_EXISTS_SQL => count(self.columns.contains(&(
                text(params, 0),
                text(params, 1),
                text(params, 2),
            ))),
            INDEX_EXISTS_SQL => count(self.constraints.contains(&(
                text(params, 0),
                text(params, 1),
                text(params, 2),
            ))),
            other => return Err(SnowHausError::Catalog(format!("unexpected query: {}", other))),
        };
        Ok(value)
    }
}
