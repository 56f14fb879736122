//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::dialect::DialectTemplates;

/// Engine value selecting a template-only dialect.
pub const CUSTOM_ENGINE: &str = "custom";

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dialect selection.
    pub dialect: DialectConfig,
}

/// Which dialect to build.
///
/// Built-in engines are selected by name (aliases such as `pg` or `mssql`
/// are accepted). `engine: custom` builds a [`SqlDialect`](crate::SqlDialect)
/// from the inline `name` and `templates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialectConfig {
    /// Engine name, or `custom`.
    pub engine: String,

    /// Dialect name (custom engines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Inline templates (custom engines only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<DialectTemplates>,
}

impl DialectConfig {
    /// Whether this selects a template-only dialect.
    pub fn is_custom(&self) -> bool {
        self.engine.trim().eq_ignore_ascii_case(CUSTOM_ENGINE)
    }
}
