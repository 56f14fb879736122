//! Oracle datastore dialect (Strategy pattern).

use tracing::debug;

use crate::core::traits::{DatastoreDialect, Manager};
use crate::dialect::{DialectTemplates, SqlDialect};
use crate::error::Result;

const TABLES_SQL: &str = "SELECT table_name AS name  FROM all_tables WHERE owner = ?";
const SEQUENCE_SQL: &str = "SELECT {}.nextval AS name from dual";
const SCHEMA_SQL: &str = "SELECT sys_context( 'userenv', 'current_schema' ) AS name FROM dual";
const ALL_SCHEMA_SQL: &str = "SELECT schema_name AS name FROM all_tables GROUP BY 1";

/// Oracle dialect implementation.
///
/// Reading a sequence advances it (`nextval`).
#[derive(Debug, Clone)]
pub struct OracleDialect {
    base: SqlDialect,
}

impl OracleDialect {
    /// Create a new Oracle dialect instance.
    pub fn new() -> Self {
        Self {
            base: SqlDialect::new("oracle", Self::templates()),
        }
    }

    /// Oracle templates. No key lookup and no foreign-key toggles.
    pub fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: TABLES_SQL.to_string(),
            sequence_sql: SEQUENCE_SQL.to_string(),
            schema_sql: SCHEMA_SQL.to_string(),
            all_schema_sql: ALL_SCHEMA_SQL.to_string(),
            key_sql: None,
            disable_foreign_key_check: None,
            enable_foreign_key_check: None,
            schema_resultset_index: 0,
        }
    }
}

impl Default for OracleDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreDialect for OracleDialect {
    fn name(&self) -> &str {
        "oracle"
    }

    fn base(&self) -> &SqlDialect {
        &self.base
    }

    fn create_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        debug!("Creating schema: {}", datastore);
        manager.execute(&format!("CREATE SCHEMA IF NOT EXISTS {}", datastore))?;
        Ok(())
    }

    fn drop_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        debug!("Dropping schema: {}", datastore);
        manager.execute(&format!("DROP SCHEMA {}", datastore))?;
        Ok(())
    }
}
