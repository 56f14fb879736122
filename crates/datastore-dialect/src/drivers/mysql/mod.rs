//! MySQL/MariaDB dialect.
//!
//! The only built-in engine with the full feature set: primary-key lookup
//! through `key_column_usage` and `FOREIGN_KEY_CHECKS` toggling.

mod dialect;

pub use dialect::MysqlDialect;
