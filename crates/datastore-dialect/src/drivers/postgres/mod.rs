//! PostgreSQL dialect.
//!
//! Sequences are read as `currval(...) + 1`, which requires the sequence to
//! have been used in the current session.

mod dialect;

pub use dialect::PostgresDialect;
