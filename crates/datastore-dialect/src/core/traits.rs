//! Core traits for engine-neutral datastore administration.
//!
//! This module defines the two seams of the library:
//!
//! - [`Manager`]: the query-execution collaborator supplied by the caller
//! - [`DatastoreDialect`]: the capability set every engine variant implements
//!
//! # Design Patterns
//!
//! - **Strategy**: each engine is an interchangeable `DatastoreDialect`
//! - **Template Method**: default trait methods delegate to the shared
//!   [`SqlDialect`]; engine variants override only what differs

use serde::Serialize;

use crate::dialect::SqlDialect;
use crate::error::Result;

use super::value::{Row, SqlValue};

/// Outcome of a non-query statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Rows affected, as reported by the driver (0 for DDL).
    pub rows_affected: u64,
}

impl ExecResult {
    /// Create a result with the given affected-row count.
    pub fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }
}

/// Executes statements and reads result sets on behalf of a dialect.
///
/// Implemented outside this crate on top of a real driver. Every dialect
/// operation makes plain synchronous calls into the manager; timeouts,
/// cancellation and connection handling are the manager's business, and
/// its errors are surfaced unmodified (wrap them with
/// [`DialectError::manager`](crate::DialectError::manager)).
pub trait Manager {
    /// Execute a statement that returns no rows.
    fn execute(&self, sql: &str) -> Result<ExecResult>;

    /// Read every row of `query`, binding `params` positionally.
    fn read_all(&self, query: &str, params: &[SqlValue]) -> Result<Vec<Row>>;

    /// Read at most one row of `query`. `Ok(None)` means no row was found.
    fn read_single(&self, query: &str, params: &[SqlValue]) -> Result<Option<Row>>;
}

/// Feature summary of a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// The dialect can create a datastore.
    pub can_create_datastore: bool,
    /// The dialect can drop a datastore.
    pub can_drop_datastore: bool,
    /// Rows can be persisted in batch.
    pub can_persist_batch: bool,
    /// Primary-key introspection query is configured.
    pub key_lookup: bool,
    /// Foreign-key check toggle statements are configured.
    pub foreign_key_toggle: bool,
}

/// Engine-specific datastore administration.
///
/// Every method has a default that delegates to [`base`](Self::base), the
/// template-driven [`SqlDialect`]. Engines whose syntax diverges override
/// individual methods (SQLite and Oracle do).
///
/// Implementations are immutable and may be shared across threads.
pub trait DatastoreDialect: Send + Sync {
    /// Dialect identifier (e.g., "mysql", "sqlite").
    fn name(&self) -> &str;

    /// The generic dialect carrying this engine's templates.
    fn base(&self) -> &SqlDialect;

    /// Whether this dialect can create a datastore.
    fn can_create_datastore(&self, _manager: &dyn Manager) -> bool {
        true
    }

    /// Whether this dialect can drop a datastore.
    fn can_drop_datastore(&self, _manager: &dyn Manager) -> bool {
        true
    }

    /// Create a datastore (database or schema).
    fn create_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        self.base().create_datastore(manager, datastore)
    }

    /// Drop a datastore (database or schema).
    fn drop_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        self.base().drop_datastore(manager, datastore)
    }

    /// Drop a table in the datastore.
    fn drop_table(&self, manager: &dyn Manager, datastore: &str, table: &str) -> Result<()> {
        self.base().drop_table(manager, datastore, table)
    }

    /// Create a table from a column/constraint specification.
    fn create_table(
        &self,
        manager: &dyn Manager,
        datastore: &str,
        table: &str,
        specification: &str,
    ) -> Result<()> {
        self.base()
            .create_table(manager, datastore, table, specification)
    }

    /// List table names of a datastore in result order, skipping empty names.
    fn get_tables(&self, manager: &dyn Manager, datastore: &str) -> Result<Vec<String>> {
        self.base().get_tables(manager, datastore)
    }

    /// Comma-joined primary-key columns, or `""` when key lookup is
    /// unsupported or fails.
    fn get_key_name(&self, manager: &dyn Manager, datastore: &str, table: &str) -> String {
        self.base().get_key_name(manager, datastore, table)
    }

    /// List normalized datastore names.
    fn get_datastores(&self, manager: &dyn Manager) -> Result<Vec<String>> {
        self.base().get_datastores(manager)
    }

    /// Normalized name of the current datastore, `""` if none is reported.
    fn get_current_datastore(&self, manager: &dyn Manager) -> Result<String> {
        self.base().get_current_datastore(manager)
    }

    /// Sequence value for a table or named sequence, 0 if none is reported.
    fn get_sequence(&self, manager: &dyn Manager, name: &str) -> Result<i64> {
        self.base().get_sequence(manager, name)
    }

    /// Disable foreign-key checks (no-op when unsupported).
    fn disable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        self.base().disable_foreign_key_check(manager)
    }

    /// Enable foreign-key checks (no-op when unsupported).
    fn enable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        self.base().enable_foreign_key_check(manager)
    }

    /// Whether the datastore can persist rows in batch.
    fn can_persist_batch(&self) -> bool {
        false
    }

    /// Feature summary. `manager` is only consulted by the capability flags.
    fn capabilities(&self, manager: &dyn Manager) -> Capabilities {
        let templates = self.base().templates();
        Capabilities {
            can_create_datastore: self.can_create_datastore(manager),
            can_drop_datastore: self.can_drop_datastore(manager),
            can_persist_batch: self.can_persist_batch(),
            key_lookup: templates.key_sql.is_some(),
            foreign_key_toggle: templates.disable_foreign_key_check.is_some()
                || templates.enable_foreign_key_check.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordingManager;
    use crate::dialect::DialectTemplates;

    struct Minimal(SqlDialect);

    impl DatastoreDialect for Minimal {
        fn name(&self) -> &str {
            "minimal"
        }

        fn base(&self) -> &SqlDialect {
            &self.0
        }
    }

    fn minimal() -> Minimal {
        Minimal(SqlDialect::new(
            "minimal",
            DialectTemplates {
                tables_sql: "SELECT name FROM tables WHERE schema = ?".into(),
                sequence_sql: "SELECT next FROM seq WHERE name = '{}'".into(),
                schema_sql: "SELECT current AS name".into(),
                all_schema_sql: "SELECT name FROM schemas".into(),
                key_sql: None,
                disable_foreign_key_check: None,
                enable_foreign_key_check: Some("SET CHECKS ON".into()),
                schema_resultset_index: 0,
            },
        ))
    }

    #[test]
    fn test_exec_result_default() {
        assert_eq!(ExecResult::default().rows_affected, 0);
        assert_eq!(ExecResult::new(3).rows_affected, 3);
    }

    #[test]
    fn test_defaults_delegate_to_base() {
        let dialect = minimal();
        let manager = RecordingManager::new();

        dialect.create_datastore(&manager, "shop").unwrap();
        dialect.drop_table(&manager, "shop", "orders").unwrap();

        assert_eq!(
            manager.statements(),
            vec!["CREATE DATABASE shop", "DROP TABLE orders"]
        );
    }

    #[test]
    fn test_capabilities() {
        let dialect = minimal();
        let manager = RecordingManager::new();
        let caps = dialect.capabilities(&manager);

        assert!(caps.can_create_datastore);
        assert!(caps.can_drop_datastore);
        assert!(!caps.can_persist_batch);
        assert!(!caps.key_lookup);
        assert!(caps.foreign_key_toggle);
        assert!(manager.calls().is_empty());
    }
}
