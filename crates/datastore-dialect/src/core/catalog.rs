//! Dialect catalog for explicit dependency injection.
//!
//! The [`DialectCatalog`] maps engine names to shared dialect instances.
//! It is explicitly constructed and handed to whatever layer selects a
//! dialect, rather than living in a global registry.

use std::collections::HashMap;
use std::sync::Arc;

use crate::drivers::{DialectImpl, Engine};
use crate::error::{DialectError, Result};

use super::traits::DatastoreDialect;

/// Registry of datastore dialects keyed by name.
///
/// # Example
///
/// ```rust
/// use datastore_dialect::core::DialectCatalog;
///
/// let catalog = DialectCatalog::with_builtins();
/// let dialect = catalog.require_dialect("postgresql").unwrap();
/// assert_eq!(dialect.name(), "postgres");
/// ```
#[derive(Default)]
pub struct DialectCatalog {
    dialects: HashMap<String, Arc<dyn DatastoreDialect>>,
}

impl DialectCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the five built-in engines registered under
    /// their canonical names.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        for engine in Engine::ALL {
            catalog.register_dialect(engine.as_str(), DialectImpl::for_engine(engine));
        }
        catalog
    }

    /// Register a dialect by name, replacing any previous registration.
    pub fn register_dialect(
        &mut self,
        name: impl Into<String>,
        dialect: impl DatastoreDialect + 'static,
    ) {
        self.dialects.insert(name.into(), Arc::new(dialect));
    }

    /// Register a dialect as an Arc (for sharing).
    pub fn register_dialect_arc(
        &mut self,
        name: impl Into<String>,
        dialect: Arc<dyn DatastoreDialect>,
    ) {
        self.dialects.insert(name.into(), dialect);
    }

    /// Get a dialect by its registered name.
    pub fn get_dialect(&self, name: &str) -> Option<Arc<dyn DatastoreDialect>> {
        self.dialects.get(name).cloned()
    }

    /// Get a dialect by name or engine alias, returning an error if not found.
    ///
    /// An exact registration wins; otherwise the name is resolved as an
    /// [`Engine`] alias (`pg`, `mssql`, ...) and looked up canonically.
    pub fn require_dialect(&self, name: &str) -> Result<Arc<dyn DatastoreDialect>> {
        if let Some(dialect) = self.get_dialect(name) {
            return Ok(dialect);
        }
        let engine: Engine = name.parse()?;
        self.get_dialect(engine.as_str()).ok_or_else(|| {
            DialectError::Config(format!("Dialect not registered: {}", engine))
        })
    }

    /// Check if a dialect is registered.
    pub fn has_dialect(&self, name: &str) -> bool {
        self.dialects.contains_key(name)
    }

    /// Get all registered dialect names, sorted.
    pub fn dialect_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for DialectCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectCatalog")
            .field("dialects", &self.dialect_names())
            .finish()
    }
}
