//! SQL Server datastore dialect (Strategy pattern).

use crate::core::traits::DatastoreDialect;
use crate::dialect::{DialectTemplates, SqlDialect};
use crate::drivers::common::{INFORMATION_SCHEMA_SCHEMATA_SQL, INFORMATION_SCHEMA_TABLES_SQL};

const SEQUENCE_SQL: &str = "SELECT current_value FROM sys.sequences WHERE  name = '{}'";
const SCHEMA_SQL: &str = "SELECT SCHEMA_NAME() AS name";

/// Microsoft SQL Server dialect implementation.
#[derive(Debug, Clone)]
pub struct MssqlDialect {
    base: SqlDialect,
}

impl MssqlDialect {
    /// Create a new SQL Server dialect instance.
    pub fn new() -> Self {
        Self {
            base: SqlDialect::new("sqlserver", Self::templates()),
        }
    }

    /// SQL Server templates. No key lookup and no foreign-key toggles.
    pub fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: INFORMATION_SCHEMA_TABLES_SQL.to_string(),
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

impl Default for MssqlDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl DatastoreDialect for MssqlDialect {
    fn name(&self) -> &str {
        "sqlserver"
    }

    fn base(&self) -> &SqlDialect {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RecordingManager, Row, SqlValue};

    #[test]
    fn test_get_sequence_query() {
        let dialect = MssqlDialect::new();
        let manager = RecordingManager::new().with_rows(vec![Row::new(
            vec!["current_value".to_string()],
            vec![SqlValue::I64(250)],
        )]);

        assert_eq!(dialect.get_sequence(&manager, "order_numbers").unwrap(), 250);
        assert_eq!(
            manager.queries(),
            vec!["SELECT current_value FROM sys.sequences WHERE  name = 'order_numbers'"]
        );
    }

    #[test]
    fn test_get_sequence_missing_row() {
        let dialect = MssqlDialect::new();
        let manager = RecordingManager::new();
        assert_eq!(dialect.get_sequence(&manager, "unknown").unwrap(), 0);
    }

    #[test]
    fn test_current_schema() {
        let dialect = MssqlDialect::new();
        let manager = RecordingManager::new().with_rows(vec![Row::named("dbo")]);

        assert_eq!(dialect.get_current_datastore(&manager).unwrap(), "dbo");
        assert_eq!(manager.queries(), vec!["SELECT SCHEMA_NAME() AS name"]);
    }

    #[test]
    fn test_get_tables_uses_information_schema() {
        let dialect = MssqlDialect::new();
        let manager = RecordingManager::new();

        assert!(dialect.get_tables(&manager, "dbo").unwrap().is_empty());
        assert_eq!(
            manager.queries(),
            vec!["SELECT table_name AS name FROM  information_schema.tables WHERE table_schema = ?"]
        );
    }
}
