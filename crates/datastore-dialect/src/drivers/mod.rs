//! Engine dialect implementations.
//!
//! This module provides one [`DatastoreDialect`] per supported engine:
//!
//! - [`mysql`]: MySQL/MariaDB
//! - [`sqlite`]: SQLite
//! - [`postgres`]: PostgreSQL
//! - [`oracle`]: Oracle
//! - [`mssql`]: Microsoft SQL Server
//!
//! # Architecture
//!
//! Each engine is a thin wrapper around a [`SqlDialect`] built from its own
//! templates. Most operations come from the trait defaults; SQLite and
//! Oracle override datastore creation and removal.
//!
//! # Static dispatch
//!
//! [`DialectImpl`] is a closed enum over the engines (plus template-only
//! custom dialects) so callers can hold a dialect by value without boxing.
//!
//! # Adding New Engines
//!
//! 1. Create a module under `drivers/` with its templates
//! 2. Implement `DatastoreDialect`, overriding only divergent operations
//! 3. Add variants to [`Engine`] and [`DialectImpl`]

pub(crate) mod common;
pub mod mssql;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlite;

pub use mssql::MssqlDialect;
pub use mysql::MysqlDialect;
pub use oracle::OracleDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::traits::{Capabilities, DatastoreDialect, Manager};
use crate::dialect::SqlDialect;
use crate::error::{DialectError, Result};

/// Built-in database engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Mysql = 0,
    Sqlite = 1,
    Postgres = 2,
    Oracle = 3,
    SqlServer = 4,
}

impl Engine {
    /// All built-in engines.
    pub const ALL: [Engine; 5] = [
        Engine::Mysql,
        Engine::Sqlite,
        Engine::Postgres,
        Engine::Oracle,
        Engine::SqlServer,
    ];

    /// Canonical engine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Engine::Mysql => "mysql",
            Engine::Sqlite => "sqlite",
            Engine::Postgres => "postgres",
            Engine::Oracle => "oracle",
            Engine::SqlServer => "sqlserver",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = DialectError;

    /// Parse an engine name, accepting common aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Engine::Mysql),
            "sqlite" | "sqlite3" => Ok(Engine::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Engine::Postgres),
            "oracle" | "ora" => Ok(Engine::Oracle),
            "sqlserver" | "mssql" | "sql_server" => Ok(Engine::SqlServer),
            _ => Err(DialectError::UnknownEngine(s.to_string())),
        }
    }
}

/// Enum-based static dispatch for dialects.
#[derive(Debug, Clone)]
pub enum DialectImpl {
    Mysql(MysqlDialect),
    Sqlite(SqliteDialect),
    Postgres(PostgresDialect),
    Oracle(OracleDialect),
    SqlServer(MssqlDialect),
    /// Template-only dialect for engines outside the built-in set.
    Custom(SqlDialect),
}

static SHARED: Lazy<[DialectImpl; 5]> = Lazy::new(|| Engine::ALL.map(DialectImpl::for_engine));

impl DialectImpl {
    /// Build a fresh dialect for a built-in engine.
    pub fn for_engine(engine: Engine) -> Self {
        match engine {
            Engine::Mysql => DialectImpl::Mysql(MysqlDialect::new()),
            Engine::Sqlite => DialectImpl::Sqlite(SqliteDialect::new()),
            Engine::Postgres => DialectImpl::Postgres(PostgresDialect::new()),
            Engine::Oracle => DialectImpl::Oracle(OracleDialect::new()),
            Engine::SqlServer => DialectImpl::SqlServer(MssqlDialect::new()),
        }
    }

    /// The process-wide instance for a built-in engine, built on first use.
    pub fn shared(engine: Engine) -> &'static DialectImpl {
        &SHARED[engine as usize]
    }

    /// Create a dialect implementation from a database type string.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownEngine`] if the name is not recognized.
    pub fn from_db_type(db_type: &str) -> Result<Self> {
        Ok(Self::for_engine(db_type.parse()?))
    }

    /// The built-in engine, or `None` for a custom dialect.
    pub fn engine(&self) -> Option<Engine> {
        match self {
            DialectImpl::Mysql(_) => Some(Engine::Mysql),
            DialectImpl::Sqlite(_) => Some(Engine::Sqlite),
            DialectImpl::Postgres(_) => Some(Engine::Postgres),
            DialectImpl::Oracle(_) => Some(Engine::Oracle),
            DialectImpl::SqlServer(_) => Some(Engine::SqlServer),
            DialectImpl::Custom(_) => None,
        }
    }

    fn inner(&self) -> &dyn DatastoreDialect {
        match self {
            DialectImpl::Mysql(d) => d,
            DialectImpl::Sqlite(d) => d,
            DialectImpl::Postgres(d) => d,
            DialectImpl::Oracle(d) => d,
            DialectImpl::SqlServer(d) => d,
            DialectImpl::Custom(d) => d,
        }
    }
}

impl From<SqlDialect> for DialectImpl {
    fn from(dialect: SqlDialect) -> Self {
        DialectImpl::Custom(dialect)
    }
}

impl DatastoreDialect for DialectImpl {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn base(&self) -> &SqlDialect {
        self.inner().base()
    }

    fn can_create_datastore(&self, manager: &dyn Manager) -> bool {
        self.inner().can_create_datastore(manager)
    }

    fn can_drop_datastore(&self, manager: &dyn Manager) -> bool {
        self.inner().can_drop_datastore(manager)
    }

    fn create_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        self.inner().create_datastore(manager, datastore)
    }

    fn drop_datastore(&self, manager: &dyn Manager, datastore: &str) -> Result<()> {
        self.inner().drop_datastore(manager, datastore)
    }

    fn drop_table(&self, manager: &dyn Manager, datastore: &str, table: &str) -> Result<()> {
        self.inner().drop_table(manager, datastore, table)
    }

    fn create_table(
        &self,
        manager: &dyn Manager,
        datastore: &str,
        table: &str,
        specification: &str,
    ) -> Result<()> {
        self.inner()
            .create_table(manager, datastore, table, specification)
    }

    fn get_tables(&self, manager: &dyn Manager, datastore: &str) -> Result<Vec<String>> {
        self.inner().get_tables(manager, datastore)
    }

    fn get_key_name(&self, manager: &dyn Manager, datastore: &str, table: &str) -> String {
        self.inner().get_key_name(manager, datastore, table)
    }

    fn get_datastores(&self, manager: &dyn Manager) -> Result<Vec<String>> {
        self.inner().get_datastores(manager)
    }

    fn get_current_datastore(&self, manager: &dyn Manager) -> Result<String> {
        self.inner().get_current_datastore(manager)
    }

    fn get_sequence(&self, manager: &dyn Manager, name: &str) -> Result<i64> {
        self.inner().get_sequence(manager, name)
    }

    fn disable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        self.inner().disable_foreign_key_check(manager)
    }

    fn enable_foreign_key_check(&self, manager: &dyn Manager) -> Result<()> {
        self.inner().enable_foreign_key_check(manager)
    }

    fn can_persist_batch(&self) -> bool {
        self.inner().can_persist_batch()
    }

    fn capabilities(&self, manager: &dyn Manager) -> Capabilities {
        self.inner().capabilities(manager)
    }
}
