//! Integration tests for catalog existence checks
//!
//! Exercises has_table / has_column / has_index / current_database against an
//! in-memory catalog, including the degrade-to-false behaviour on failures.

mod common;

use std::sync::Arc;

use common::MockCatalog;
use snowhaus::catalog::{CURRENT_SCHEMA_SQL, TABLE_EXISTS_SQL};
use snowhaus::prelude::*;

fn dialect_over(catalog: MockCatalog) -> (Snowflake, Arc<MockCatalog>) {
    let catalog = Arc::new(catalog);
    let dialect = Snowflake::new().with_executor(catalog.clone());
    (dialect, catalog)
}

#[tokio::test]
async fn test_has_table_for_existing_and_missing_tables() {
    let (dialect, _) = dialect_over(MockCatalog::new("ANALYTICS", "PUBLIC").with_table("PUBLIC", "WIDGETS"));

    assert!(dialect.has_table("WIDGETS").await);
    assert!(!dialect.has_table("GADGETS").await);
}

#[tokio::test]
async fn test_has_table_looks_in_current_schema() {
    let (dialect, catalog) =
        dialect_over(MockCatalog::new("ANALYTICS", "STAGING").with_table("PUBLIC", "WIDGETS"));

    assert!(!dialect.has_table("WIDGETS").await);
    assert_eq!(catalog.queries(), vec![CURRENT_SCHEMA_SQL, TABLE_EXISTS_SQL]);
}

#[tokio::test]
async fn test_default_schema_skips_current_schema_lookup() {
    let catalog = Arc::new(MockCatalog::new("ANALYTICS", "STAGING").with_table("PUBLIC", "WIDGETS"));
    let dialect = Snowflake::new()
        .with_default_schema("PUBLIC")
        .with_executor(catalog.clone());

    assert!(dialect.has_table("WIDGETS").await);
    assert_eq!(catalog.queries(), vec![TABLE_EXISTS_SQL]);
}

#[tokio::test]
async fn test_has_column_and_index() {
    let (dialect, _) = dialect_over(
        MockCatalog::new("ANALYTICS", "PUBLIC")
            .with_table("PUBLIC", "WIDGETS")
            .with_column("PUBLIC", "WIDGETS", "ITEM")
            .with_constraint("PUBLIC", "WIDGETS", "WIDGETS_PK"),
    );

    assert!(dialect.has_column("WIDGETS", "ITEM").await);
    assert!(!dialect.has_column("WIDGETS", "COLOR").await);
    assert!(dialect.has_index("WIDGETS", "WIDGETS_PK").await);
    assert!(!dialect.has_index("WIDGETS", "WIDGETS_NAME_UQ").await);
}

#[tokio::test]
async fn test_connection_failure_reads_as_missing() {
    let (dialect, catalog) = dialect_over(MockCatalog::offline());

    assert!(!dialect.has_table("WIDGETS").await);
    assert!(!dialect.has_column("WIDGETS", "ITEM").await);
    assert!(!dialect.has_index("WIDGETS", "WIDGETS_PK").await);
    assert_eq!(dialect.current_database().await, "");

    // Schema lookup fails first, so no count query is attempted
    assert!(!catalog.queries().iter().any(|q| q == TABLE_EXISTS_SQL));
}

#[tokio::test]
async fn test_failure_with_default_schema_still_reads_as_missing() {
    let dialect = Snowflake::new()
        .with_default_schema("PUBLIC")
        .with_executor(Arc::new(MockCatalog::offline()));

    assert!(!dialect.has_table("WIDGETS").await);
}

#[tokio::test]
async fn test_no_executor_reads_as_missing() {
    let dialect = Snowflake::new();

    assert!(!dialect.has_table("WIDGETS").await);
    assert_eq!(dialect.current_database().await, "");
}

#[tokio::test]
async fn test_current_database() {
    let (dialect, _) = dialect_over(MockCatalog::new("ANALYTICS", "PUBLIC"));
    assert_eq!(dialect.current_database().await, "ANALYTICS");

    let (dialect, _) = dialect_over(MockCatalog::default());
    assert_eq!(dialect.current_database().await, "");
}

#[tokio::test]
async fn test_catalog_counts_from_any_numeric_representation() {
    struct FixedCount(DriverValue);

    #[async_trait]
    impl CatalogExecutor for FixedCount {
        async fn query_scalar(
            &self,
            _sql: &str,
            _params: &[DriverValue],
        ) -> Result<DriverValue, SnowHausError> {
            Ok(self.0.clone())
        }
    }

    for (value, expected) in [
        (DriverValue::BigInt(2), true),
        (DriverValue::Integer(0), false),
        (DriverValue::Text("3".to_string()), true),
        (DriverValue::Float(1.0), true),
        (DriverValue::Null, false),
        (DriverValue::Text("n/a".to_string()), false),
    ] {
        let executor = FixedCount(value.clone());
        let catalog = Catalog::new(&executor);
        assert_eq!(
            catalog.table_exists("PUBLIC", "WIDGETS").await,
            expected,
            "count value {:?}",
            value
        );
    }
}

#[tokio::test]
async fn test_dialect_through_registry_is_shared() {
    let catalog = Arc::new(MockCatalog::new("ANALYTICS", "PUBLIC").with_table("PUBLIC", "WIDGETS"));
    let mut registry = DialectRegistry::new();
    registry
        .register(
            "snowflake".to_string(),
            Snowflake::new().with_executor(catalog),
        )
        .unwrap();

    let dialect = registry.get("snowflake").unwrap();
    assert!(dialect.has_table("WIDGETS").await);
}
