//! Dialect registry
//!
//! Hosts populate a registry explicitly at startup (see [`crate::init`]) and
//! look dialects up by name afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dialect::Dialect;
use crate::errors::SnowHausError;

#[derive(Default)]
pub struct DialectRegistry {
    dialects: HashMap<String, Arc<dyn Dialect>>,
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.list_dialects())
            .finish()
    }
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dialect under a given name
    pub fn register<D>(&mut self, name: String, dialect: D) -> Result<(), SnowHausError>
    where
        D: Dialect + 'static,
    {
        self.register_shared(name, Arc::new(dialect))
    }

    /// Register an already shared dialect under a given name
    pub fn register_shared(
        &mut self,
        name: String,
        dialect: Arc<dyn Dialect>,
    ) -> Result<(), SnowHausError> {
        if self.dialects.contains_key(&name) {
            return Err(SnowHausError::DialectAlreadyRegistered(name));
        }

        tracing::info!("registered dialect {} as {}", dialect.name(), name);
        self.dialects.insert(name, dialect);
        Ok(())
    }

    /// Get a registered dialect by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn Dialect>, SnowHausError> {
        self.dialects
            .get(name)
            .cloned()
            .ok_or_else(|| SnowHausError::DialectNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// List all registered dialect names, sorted
    pub fn list_dialects(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.dialects.keys().collect();
        names.sort();
        names
    }

    /// Remove a dialect by name
    pub fn unregister(&mut self, name: &str) -> Result<(), SnowHausError> {
        self.dialects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| SnowHausError::DialectNotFound(name.to_string()))
    }
}
