//! Microsoft SQL Server dialect.
//!
//! Sequences are read from `sys.sequences` (SQL Server 2012+).

mod dialect;

pub use dialect::MssqlDialect;
