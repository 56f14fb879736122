//! # datastore-dialect
//!
//! Engine-neutral datastore administration.
//!
//! This library turns a small set of administrative operations into the SQL
//! text of a specific engine and runs it through a caller-supplied
//! [`Manager`]:
//!
//! - **Datastore lifecycle**: create/drop a database or schema
//! - **Tables**: create, drop and list tables
//! - **Introspection**: primary-key columns, datastores, current datastore
//! - **Sequences**: read the next sequence value
//! - **Foreign keys**: toggle constraint checking
//!
//! Built-in engines are MySQL, SQLite, PostgreSQL, Oracle and SQL Server.
//! Other engines can be described with templates alone (see [`SqlDialect`]).
//!
//! ## Example
//!
//! ```rust
//! use datastore_dialect::{DatastoreDialect, DialectImpl, Engine, RecordingManager};
//!
//! let dialect = DialectImpl::shared(Engine::Mysql);
//! let manager = RecordingManager::new();
//!
//! dialect.create_table(&manager, "shop", "orders", "id INT PRIMARY KEY").unwrap();
//! assert_eq!(manager.statements(), vec!["CREATE TABLE orders(id INT PRIMARY KEY)"]);
//! ```

pub mod config;
pub mod core;
pub mod dialect;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use crate::core::{
    Call, Capabilities, DatastoreDialect, DialectCatalog, ExecResult, Manager, RecordingManager,
    Row, SqlValue,
};
pub use config::{Config, DialectConfig};
pub use dialect::{normalize_name, placeholder_count, render_template, DialectTemplates, SqlDialect};
pub use drivers::{
    DialectImpl, Engine, MssqlDialect, MysqlDialect, OracleDialect, PostgresDialect, SqliteDialect,
};
pub use error::{BoxError, DialectError, Result};
