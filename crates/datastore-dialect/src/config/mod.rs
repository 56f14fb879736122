//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;
pub use validation::validate_templates;

use std::path::Path;

use tracing::debug;

use crate::dialect::SqlDialect;
use crate::drivers::DialectImpl;
use crate::error::{DialectError, Result};

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Build the configured dialect.
    pub fn build_dialect(&self) -> Result<DialectImpl> {
        self.validate()?;
        let dialect = &self.dialect;

        if !dialect.is_custom() {
            return DialectImpl::from_db_type(&dialect.engine);
        }

        match (&dialect.name, &dialect.templates) {
            (Some(name), Some(templates)) => {
                debug!("Building custom dialect: {}", name);
                Ok(DialectImpl::Custom(SqlDialect::new(
                    name.clone(),
                    templates.clone(),
                )))
            }
            _ => Err(DialectError::Config(
                "custom engine requires dialect.name and dialect.templates".into(),
            )),
        }
    }
}
