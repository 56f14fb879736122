//! SQLite datastore dialect (Strategy pattern).

use tracing::debug;

use crate::core::traits::{DatastoreDialect, Manager};
use crate::dialect::{DialectTemplates, SqlDialect};
use crate::drivers::common::SQLITE_MASTER_TABLES_SQL;
use crate::error::Result;

const SEQUENCE_SQL: &str = "SELECT COALESCE(MAX(name), 0) + 1   FROM (SELECT seq AS name FROM SQLITE_SEQUENCE WHERE name = '{}')";
const SCHEMA_SQL: &str = "PRAGMA database_list";

/// `PRAGMA database_list` columns are (seq, name, file); the file path is
/// the datastore identity.
const SCHEMA_RESULTSET_INDEX: usize = 2;

/// SQLite dialect implementation.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    base: SqlDialect,
}

impl SqliteDialect {
    /// Create a new SQLite dialect instance.
    pub fn new() -> Self {
        Self {
            base: SqlDialect::new("sqlite", Self::templates()),
        }
    }

    /// SQLite templates. No key lookup and no foreign-key toggles.
    pub fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: SQLITE_MASTER_TABLES_SQL.to_string(),
            sequence_sql: SEQUENCE_SQL.to_string(),
            schema_sql: SCHEMA_SQL.to_string(),
            all_schema_sql: SCHEMA_SQL.to_string(),
            key_sql: None,
            disable_foreign_key_check: None,
            enable_foreign_key_check: None,
            schema_resultset_index: SCHEMA_RESULTSET_INDEX,
        }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreDialect for SqliteDialect {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn base(&self) -> &SqlDialect {
        &self.base
    }

    /// No-op: the database file is created when the connection opens it.
    fn create_datastore(&self, _manager: &dyn Manager, _datastore: &str) -> Result<()> {
        Ok(())
    }

    /// Drop every table of the datastore, in listing order.
    ///
    /// Stops at the first failing drop; tables after it are left in place.
    fn drop_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        let tables = self.get_tables(manager, datastore)?;
        debug!("Dropping {} tables from {}", tables.len(), datastore);
        for table in &tables {
            self.drop_table(manager, datastore, table)?;
        }
        Ok(())
    }
}
