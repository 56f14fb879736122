//! SQLite dialect.
//!
//! A SQLite datastore is a file: creating one is implicit in opening the
//! connection, and there is no `DROP DATABASE`, so dropping a datastore
//! drops each of its tables instead.

mod dialect;

pub use dialect::SqliteDialect;
