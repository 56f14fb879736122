//! Generic SQL dialect driven by per-engine templates.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::core::traits::{DatastoreDialect, Manager};
use crate::core::value::{Row, SqlValue};
use crate::error::Result;

use super::name::normalize_name;
use super::template::render_template;

/// SQL text and result-shape settings for one engine.
///
/// Optional statements that are `None` mark the feature as unsupported; the
/// corresponding operation then never reaches the manager. When loaded from
/// YAML, an empty string is read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectTemplates {
    /// Lists tables; binds the datastore name as its single `?` parameter.
    pub tables_sql: String,

    /// Reads a sequence value; `{}` is replaced by the sequence/table name.
    pub sequence_sql: String,

    /// Reads the current datastore name.
    pub schema_sql: String,

    /// Lists all datastores.
    pub all_schema_sql: String,

    /// Lists primary-key columns as `name`; `{}` placeholders are table, then datastore.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub key_sql: Option<String>,

    /// Statement disabling foreign-key checks.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub disable_foreign_key_check: Option<String>,

    /// Statement enabling foreign-key checks.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub enable_foreign_key_check: Option<String>,

    /// Column of a schema row holding the datastore name.
    #[serde(default)]
    pub schema_resultset_index: usize,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Template-driven dialect.
///
/// Implements every [`DatastoreDialect`] operation by rendering the
/// configured template and handing it to the manager. Names are spliced
/// into SQL text verbatim; only the datastore filter of
/// [`get_tables`](Self::get_tables) travels as a bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDialect {
    name: String,
    templates: DialectTemplates,
}

impl SqlDialect {
    /// Create a dialect from its templates.
    pub fn new(name: impl Into<String>, templates: DialectTemplates) -> Self {
        Self {
            name: name.into(),
            templates,
        }
    }

    /// Dialect identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured templates.
    pub fn templates(&self) -> &DialectTemplates {
        &self.templates
    }

    /// `CREATE DATABASE <datastore>`
    pub fn create_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        debug!("Creating datastore: {}", datastore);
        manager.execute(&format!("CREATE DATABASE {}", datastore))?;
        Ok(())
    }

    /// `DROP DATABASE <datastore>`
    pub fn drop_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        debug!("Dropping datastore: {}", datastore);
        manager.execute(&format!("DROP DATABASE {}", datastore))?;
        Ok(())
    }

    /// `DROP TABLE <table>`; the datastore is implied by the connection.
    pub fn drop_table(&self, manager: &dyn Manager, _datastore: &str, table: &str) -> Result<()> {
        debug!("Dropping table: {}", table);
        manager.execute(&format!("DROP TABLE {}", table))?;
        Ok(())
    }

    /// `CREATE TABLE <table>(<specification>)`
    pub fn create_table(
        &self,
        manager: &dyn Manager,
        _datastore: &str,
        table: &str,
        specification: &str,
    ) -> Result<()> {
        debug!("Creating table: {}", table);
        manager.execute(&format!("CREATE TABLE {}({})", table, specification))?;
        Ok(())
    }

    /// Table names in result order; empty names are skipped.
    pub fn get_tables(&self, manager: &dyn Manager, datastore: &str) -> Result<Vec<String>> {
        let rows = manager.read_all(
            &self.templates.tables_sql,
            &[SqlValue::from(datastore)],
        )?;
        let tables: Vec<String> = rows
            .iter()
            .map(name_column)
            .filter(|name| !name.is_empty())
            .collect();
        debug!("Found {} tables in {}", tables.len(), datastore);
        Ok(tables)
    }

    /// Primary-key lookup with distinct outcomes.
    ///
    /// `Ok(None)` when the dialect has no key query, `Ok(Some(cols))` with
    /// comma-joined column names otherwise, and the manager's error on a
    /// failed read.
    pub fn try_key_name(
        &self,
        manager: &dyn Manager,
        datastore: &str,
        table: &str,
    ) -> Result<Option<String>> {
        let Some(key_sql) = self.templates.key_sql.as_deref() else {
            return Ok(None);
        };
        let query = render_template(key_sql, &[table, datastore]);
        let rows = manager.read_all(&query, &[])?;
        let columns: Vec<String> = rows.iter().map(name_column).collect();
        Ok(Some(columns.join(",")))
    }

    /// Comma-joined primary-key columns.
    ///
    /// Best effort: an unsupported lookup and a failed read both yield `""`.
    /// Use [`try_key_name`](Self::try_key_name) to tell them apart.
    pub fn get_key_name(&self, manager: &dyn Manager, datastore: &str, table: &str) -> String {
        match self.try_key_name(manager, datastore, table) {
            Ok(key) => key.unwrap_or_default(),
            Err(e) => {
                warn!("Primary key lookup failed for {}.{}: {}", datastore, table, e);
                String::new()
            }
        }
    }

    /// Normalized names of all datastores.
    pub fn get_datastores(&self, manager: &dyn Manager) -> Result<Vec<String>> {
        let rows = manager.read_all(&self.templates.all_schema_sql, &[])?;
        rows.iter().map(|row| self.schema_name(row)).collect()
    }

    /// Normalized current datastore name, `""` when no row comes back.
    pub fn get_current_datastore(&self, manager: &dyn Manager) -> Result<String> {
        match manager.read_single(&self.templates.schema_sql, &[])? {
            Some(row) => self.schema_name(&row),
            None => Ok(String::new()),
        }
    }

    /// Sequence value from the first column, 0 when no row (or NULL) comes back.
    pub fn get_sequence(&self, manager: &dyn Manager, name: &str) -> Result<i64> {
        let query = render_template(&self.templates.sequence_sql, &[name]);
        let Some(row) = manager.read_single(&query, &[])? else {
            return Ok(0);
        };
        match row.get(0) {
            None | Some(SqlValue::Null) => Ok(0),
            Some(value) => value.to_i64(),
        }
    }

    /// Run the disable statement if one is configured.
    pub fn disable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        run_optional(manager, self.templates.disable_foreign_key_check.as_deref())
    }

    /// Run the enable statement if one is configured.
    pub fn enable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        run_optional(manager, self.templates.enable_foreign_key_check.as_deref())
    }

    fn schema_name(&self, row: &Row) -> Result<String> {
        let value = row.require(self.templates.schema_resultset_index)?;
        Ok(normalize_name(&value.as_string()).to_string())
    }
}

impl DatastoreDialect for SqlDialect {
    fn name(&self) -> &str {
        &self.name
    }

    fn base(&self) -> &SqlDialect {
        self
    }
}

/// The `name` column of a row; positional rows fall back to their first value.
fn name_column(row: &Row) -> String {
    let value = if row.columns().is_empty() {
        row.get(0)
    } else {
        row.get_named("name")
    };
    value.map(SqlValue::as_string).unwrap_or_default()
}

fn run_optional(manager: &dyn Manager, statement: Option<&str>) -> Result<()> {
    if let Some(sql) = statement {
        debug!("Executing: {}", sql);
        manager.execute(sql)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Call, RecordingManager};
    use crate::error::DialectError;

    fn templates() -> DialectTemplates {
        DialectTemplates {
            tables_sql: "SELECT table_name AS name FROM tables WHERE schema = ?".into(),
            sequence_sql: "SELECT next FROM seq WHERE name = '{}'".into(),
            schema_sql: "SELECT current AS name".into(),
            all_schema_sql: "SELECT schema_name AS name FROM schemata".into(),
            key_sql: Some("SELECT col AS name FROM keys WHERE t = '{}' AND s = '{}'".into()),
            disable_foreign_key_check: Some("SET CHECKS=0".into()),
            enable_foreign_key_check: Some("SET CHECKS=1".into()),
            schema_resultset_index: 0,
        }
    }

    fn dialect() -> SqlDialect {
        SqlDialect::new("test", templates())
    }

    #[test]
    fn test_ddl_statements() {
        let d = dialect();
        let m = RecordingManager::new();

        d.create_datastore(&m, "shop").unwrap();
        d.drop_datastore(&m, "shop").unwrap();
        d.create_table(&m, "shop", "orders", "id INT PRIMARY KEY, total DECIMAL(10,2)")
            .unwrap();
        d.drop_table(&m, "shop", "orders").unwrap();

        assert_eq!(
            m.statements(),
            vec![
                "CREATE DATABASE shop",
                "DROP DATABASE shop",
                "CREATE TABLE orders(id INT PRIMARY KEY, total DECIMAL(10,2))",
                "DROP TABLE orders",
            ]
        );
    }

    #[test]
    fn test_ddl_error_propagates() {
        let d = dialect();
        let m = RecordingManager::new().with_execute_error("permission denied");

        let err = d.create_datastore(&m, "shop").unwrap_err();
        assert!(matches!(err, DialectError::Manager(_)));
        assert_eq!(err.to_string(), "permission denied");
    }

    #[test]
    fn test_get_tables_binds_datastore_and_filters_empty() {
        let d = dialect();
        let m = RecordingManager::new().with_rows(vec![
            Row::named("a"),
            Row::named(""),
            Row::named("b"),
        ]);

        assert_eq!(d.get_tables(&m, "shop").unwrap(), vec!["a", "b"]);
        assert_eq!(
            m.calls(),
            vec![Call::ReadAll {
                query: "SELECT table_name AS name FROM tables WHERE schema = ?".into(),
                params: vec![SqlValue::from("shop")],
            }]
        );
    }

    #[test]
    fn test_get_tables_positional_rows() {
        let d = dialect();
        let m = RecordingManager::new().with_rows(vec![
            Row::from_values(vec![SqlValue::from("orders")]),
            Row::from_values(vec![SqlValue::Null]),
        ]);
        assert_eq!(d.get_tables(&m, "shop").unwrap(), vec!["orders"]);
    }

    #[test]
    fn test_get_tables_read_error() {
        let d = dialect();
        let m = RecordingManager::new().with_read_error("no such schema");
        assert_eq!(
            d.get_tables(&m, "shop").unwrap_err().to_string(),
            "no such schema"
        );
    }

    #[test]
    fn test_get_key_name_joins_columns() {
        let d = dialect();
        let m = RecordingManager::new().with_rows(vec![
            Row::named("tenant_id"),
            Row::named("order_id"),
        ]);

        assert_eq!(d.get_key_name(&m, "shop", "orders"), "tenant_id,order_id");
        assert_eq!(
            m.queries(),
            vec!["SELECT col AS name FROM keys WHERE t = 'orders' AND s = 'shop'"]
        );
    }

    #[test]
    fn test_get_key_name_positional_rows() {
        let d = dialect();
        let m = RecordingManager::new().with_rows(vec![
            Row::from_values(vec![SqlValue::from("id")]),
            Row::from_values(vec![SqlValue::from("region")]),
        ]);

        assert_eq!(d.get_key_name(&m, "shop", "orders"), "id,region");
    }

    #[test]
    fn test_get_key_name_swallows_read_error() {
        let d = dialect();
        let m = RecordingManager::new().with_read_error("connection lost");

        assert_eq!(d.get_key_name(&m, "shop", "orders"), "");
        assert!(d.try_key_name(&RecordingManager::new().with_read_error("x"), "shop", "orders").is_err());
    }

    #[test]
    fn test_get_key_name_unsupported_skips_manager() {
        let mut t = templates();
        t.key_sql = None;
        let d = SqlDialect::new("nokey", t);
        let m = RecordingManager::new();

        assert_eq!(d.get_key_name(&m, "shop", "orders"), "");
        assert_eq!(d.try_key_name(&m, "shop", "orders").unwrap(), None);
        assert!(m.calls().is_empty());
    }

    #[test]
    fn test_get_datastores_normalizes() {
        let d = dialect();
        let m = RecordingManager::new().with_rows(vec![
            Row::named("shop"),
            Row::named("/var/lib/db/archive.db"),
        ]);
        assert_eq!(d.get_datastores(&m).unwrap(), vec!["shop", "archive.db"]);
    }

    #[test]
    fn test_get_datastores_index_out_of_range() {
        let mut t = templates();
        t.schema_resultset_index = 3;
        let d = SqlDialect::new("wide", t);
        let m = RecordingManager::new().with_rows(vec![Row::named("shop")]);

        assert!(matches!(
            d.get_datastores(&m),
            Err(DialectError::MissingColumn { index: 3, width: 1 })
        ));
    }

    #[test]
    fn test_get_current_datastore() {
        let d = dialect();
        let none = RecordingManager::new();
        assert_eq!(d.get_current_datastore(&none).unwrap(), "");

        let some = RecordingManager::new().with_rows(vec![Row::named("shop")]);
        assert_eq!(d.get_current_datastore(&some).unwrap(), "shop");

        let failing = RecordingManager::new().with_read_error("timeout");
        assert!(d.get_current_datastore(&failing).is_err());
    }

    #[test]
    fn test_get_current_datastore_uses_index() {
        let mut t = templates();
        t.schema_resultset_index = 2;
        let d = SqlDialect::new("pragma", t);
        let m = RecordingManager::new().with_rows(vec![Row::from_values(vec![
            SqlValue::I64(0),
            SqlValue::from("x"),
            SqlValue::from("main"),
            SqlValue::from("z"),
        ])]);

        assert_eq!(d.get_current_datastore(&m).unwrap(), "main");
    }

    #[test]
    fn test_get_sequence() {
        let d = dialect();

        let none = RecordingManager::new();
        assert_eq!(d.get_sequence(&none, "orders").unwrap(), 0);
        assert_eq!(none.queries(), vec!["SELECT next FROM seq WHERE name = 'orders'"]);

        let found = RecordingManager::new().with_rows(vec![Row::from_values(vec![SqlValue::I64(42)])]);
        assert_eq!(d.get_sequence(&found, "orders").unwrap(), 42);

        let null = RecordingManager::new().with_rows(vec![Row::from_values(vec![SqlValue::Null])]);
        assert_eq!(d.get_sequence(&null, "orders").unwrap(), 0);

        let text = RecordingManager::new().with_rows(vec![Row::from_values(vec![SqlValue::from("abc")])]);
        assert!(matches!(
            d.get_sequence(&text, "orders"),
            Err(DialectError::Decode { .. })
        ));

        let failing = RecordingManager::new().with_read_error("sequence does not exist");
        assert_eq!(
            d.get_sequence(&failing, "orders").unwrap_err().to_string(),
            "sequence does not exist"
        );
    }

    #[test]
    fn test_foreign_key_toggles() {
        let d = dialect();
        let m = RecordingManager::new();
        d.disable_foreign_key_check(&m).unwrap();
        d.enable_foreign_key_check(&m).unwrap();
        assert_eq!(m.statements(), vec!["SET CHECKS=0", "SET CHECKS=1"]);
    }

    #[test]
    fn test_foreign_key_toggles_unsupported_are_noops() {
        let mut t = templates();
        t.disable_foreign_key_check = None;
        t.enable_foreign_key_check = None;
        let d = SqlDialect::new("nofk", t);
        let m = RecordingManager::new().with_execute_error("must not run");

        d.disable_foreign_key_check(&m).unwrap();
        d.enable_foreign_key_check(&m).unwrap();
        assert!(m.calls().is_empty());
    }

    #[test]
    fn test_templates_from_yaml_empty_is_none() {
        let yaml = r#"
tables_sql: "SELECT name FROM t WHERE s = ?"
sequence_sql: "SELECT 1"
schema_sql: "SELECT 'x' AS name"
all_schema_sql: "SELECT 'x' AS name"
key_sql: ""
enable_foreign_key_check: "SET CHECKS=1"
schema_resultset_index: 2
"#;
        let t: DialectTemplates = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(t.key_sql, None);
        assert_eq!(t.disable_foreign_key_check, None);
        assert_eq!(t.enable_foreign_key_check.as_deref(), Some("SET CHECKS=1"));
        assert_eq!(t.schema_resultset_index, 2);
    }
}
