//! Oracle dialect.
//!
//! Oracle has no separate database object at this level: a datastore is a
//! schema, so datastore lifecycle uses `CREATE SCHEMA` / `DROP SCHEMA`.

mod dialect;

pub use dialect::OracleDialect;
