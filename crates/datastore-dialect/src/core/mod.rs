//! Core abstractions for engine-neutral datastore administration.
//!
//! - [`value`]: loosely-typed result values and rows
//! - [`traits`]: the [`Manager`] collaborator and the [`DatastoreDialect`] contract
//! - [`catalog`]: name-keyed dialect registry
//! - [`recording`]: call-recording manager for dry runs and tests
//!
//! # Architecture
//!
//! The core defines the contract; `dialect` supplies the template-driven
//! default implementation and `drivers` the engine variants. Dialects never
//! talk to a database themselves: every statement goes through a caller
//! supplied [`Manager`].

pub mod catalog;
pub mod recording;
pub mod traits;
pub mod value;

pub use catalog::DialectCatalog;
pub use recording::{Call, RecordingManager};
pub use traits::{Capabilities, DatastoreDialect, ExecResult, Manager};
pub use value::{Row, SqlValue};
