//! SQL templates shared by several engines.

/// `information_schema` table listing (MySQL, SQL Server).
pub(crate) const INFORMATION_SCHEMA_TABLES_SQL: &str =
    "SELECT table_name AS name FROM  information_schema.tables WHERE table_schema = ?";

/// `information_schema` schema listing (MySQL, PostgreSQL, SQL Server).
pub(crate) const INFORMATION_SCHEMA_SCHEMATA_SQL: &str =
    "SELECT schema_name AS name FROM  information_schema.schemata";

/// SQLite master-catalog table listing, also used for PostgreSQL.
///
/// `LENGTH(?) > 0` is always true; it exists so the bound datastore
/// parameter is consumed.
pub(crate) const SQLITE_MASTER_TABLES_SQL: &str =
    "SELECT name FROM SQLITE_MASTER WHERE type='table' AND name NOT IN('sqlite_sequence') AND LENGTH(?) > 0";
