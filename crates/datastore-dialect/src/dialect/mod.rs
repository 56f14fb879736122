//! Template-driven SQL dialect.
//!
//! - [`SqlDialect`]: the generic implementation every engine builds on
//! - [`DialectTemplates`]: the per-engine SQL text and result-shape settings
//! - [`normalize_name`]: strips path prefixes from reported datastore names
//! - [`render_template`]: positional `{}` substitution
//!
//! # Usage
//!
//! Engines outside the built-in set can be described entirely by templates:
//!
//! ```rust
//! use datastore_dialect::dialect::{DialectTemplates, SqlDialect};
//!
//! let h2 = SqlDialect::new("h2", DialectTemplates {
//!     tables_sql: "SELECT table_name AS name FROM information_schema.tables WHERE table_schema = ?".into(),
//!     sequence_sql: "SELECT NEXT VALUE FOR {}".into(),
//!     schema_sql: "SELECT SCHEMA() AS name".into(),
//!     all_schema_sql: "SELECT schema_name AS name FROM information_schema.schemata".into(),
//!     key_sql: None,
//!     disable_foreign_key_check: Some("SET REFERENTIAL_INTEGRITY FALSE".into()),
//!     enable_foreign_key_check: Some("SET REFERENTIAL_INTEGRITY TRUE".into()),
//!     schema_resultset_index: 0,
//! });
//! assert_eq!(h2.name(), "h2");
//! ```

mod name;
mod sql;
mod template;

pub use name::normalize_name;
pub use sql::{DialectTemplates, SqlDialect};
pub use template::{placeholder_count, render_template};
