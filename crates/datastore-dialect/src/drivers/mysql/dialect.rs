//! MySQL/MariaDB datastore dialect (Strategy pattern).

use crate::core::traits::DatastoreDialect;
use crate::dialect::{DialectTemplates, SqlDialect};
use crate::drivers::common::{INFORMATION_SCHEMA_SCHEMATA_SQL, INFORMATION_SCHEMA_TABLES_SQL};

const SEQUENCE_SQL: &str = "SELECT auto_increment FROM information_schema.tables WHERE table_name = '{}' AND table_schema = DATABASE()";
const KEY_SQL: &str = "SELECT column_name AS name FROM information_schema.key_column_usage WHERE table_name = '{}' AND table_schema = '{}' AND constraint_name='PRIMARY'";
const SCHEMA_SQL: &str = "SELECT DATABASE() AS name";
const DISABLE_FOREIGN_KEY_CHECK: &str = "SET FOREIGN_KEY_CHECKS=0";
const ENABLE_FOREIGN_KEY_CHECK: &str = "SET FOREIGN_KEY_CHECKS=1";

/// MySQL/MariaDB dialect implementation.
///
/// Sequences are read from the table's `auto_increment` counter.
/// Compatible with MySQL 5.7+, 8.0+, and MariaDB 10.2+.
#[derive(Debug, Clone)]
pub struct MysqlDialect {
    base: SqlDialect,
}

impl MysqlDialect {
    /// Create a new MySQL dialect instance.
    pub fn new() -> Self {
        Self {
            base: SqlDialect::new("mysql", Self::templates()),
        }
    }

    /// MySQL templates.
    pub fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: INFORMATION_SCHEMA_TABLES_SQL.to_string(),
            sequence_sql: SEQUENCE_SQL.to_string(),
            schema_sql: SCHEMA_SQL.to_string(),
            all_schema_sql: INFORMATION_SCHEMA_SCHEMATA_SQL.to_string(),
            key_sql: Some(KEY_SQL.to_string()),
            disable_foreign_key_check: Some(DISABLE_FOREIGN_KEY_CHECK.to_string()),
            enable_foreign_key_check: Some(ENABLE_FOREIGN_KEY_CHECK.to_string()),
            schema_resultset_index: 0,
        }
    }
}

impl Default for MysqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreDialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn base(&self) -> &SqlDialect {
        &self.base
    }
}
