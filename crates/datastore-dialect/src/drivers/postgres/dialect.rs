//! PostgreSQL datastore dialect (Strategy pattern).

use crate::core::traits::DatastoreDialect;
use crate::dialect::{DialectTemplates, SqlDialect};
use crate::drivers::common::{INFORMATION_SCHEMA_SCHEMATA_SQL, SQLITE_MASTER_TABLES_SQL};

const SEQUENCE_SQL: &str = "SELECT currval({}) + 1";
const SCHEMA_SQL: &str = "SELECT current_schema() AS name";

/// PostgreSQL dialect implementation.
#[derive(Debug, Clone)]
pub struct PostgresDialect {
    base: SqlDialect,
}

impl PostgresDialect {
    /// Create a new PostgreSQL dialect instance.
    pub fn new() -> Self {
        Self {
            base: SqlDialect::new("postgres", Self::templates()),
        }
    }

    /// PostgreSQL templates. No key lookup and no foreign-key toggles.
    pub fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: SQLITE_MASTER_TABLES_SQL.to_string(),
            sequence_sql: SEQUENCE_SQL.to_string(),
            schema_sql: SCHEMA_SQL.to_string(),
            all_schema_sql: INFORMATION_SCHEMA_SCHEMATA_SQL.to_string(),
            key_sql: None,
            disable_foreign_key_check: None,
            enable_foreign_key_check: None,
            schema_resultset_index: 0,
        }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreDialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn base(&self) -> &SqlDialect {
        &self.base
    }
}
