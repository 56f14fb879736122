//! Configuration validation.

use super::Config;
use crate::dialect::{placeholder_count, DialectTemplates};
use crate::drivers::Engine;
use crate::error::{DialectError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    let dialect = &config.dialect;

    if dialect.engine.trim().is_empty() {
        return Err(DialectError::Config("dialect.engine is required".into()));
    }

    if !dialect.is_custom() {
        dialect.engine.parse::<Engine>()?;
        if dialect.templates.is_some() {
            return Err(DialectError::Config(format!(
                "dialect.templates is only allowed with engine 'custom', got '{}'",
                dialect.engine
            )));
        }
        return Ok(());
    }

    match dialect.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {}
        _ => {
            return Err(DialectError::Config(
                "dialect.name is required for a custom engine".into(),
            ))
        }
    }

    let templates = dialect.templates.as_ref().ok_or_else(|| {
        DialectError::Config("dialect.templates is required for a custom engine".into())
    })?;

    validate_templates(templates)
}

/// Check that a template set is usable by the generic dialect.
pub fn validate_templates(templates: &DialectTemplates) -> Result<()> {
    let required = [
        ("tables_sql", &templates.tables_sql),
        ("schema_sql", &templates.schema_sql),
        ("all_schema_sql", &templates.all_schema_sql),
    ];
    for (field, sql) in required {
        if sql.trim().is_empty() {
            return Err(DialectError::Config(format!(
                "dialect.templates.{} is required",
                field
            )));
        }
    }

    if placeholder_count(&templates.sequence_sql) > 1 {
        return Err(DialectError::Config(
            "dialect.templates.sequence_sql takes at most one '{}' placeholder".into(),
        ));
    }

    if let Some(key_sql) = &templates.key_sql {
        if placeholder_count(key_sql) > 2 {
            return Err(DialectError::Config(
                "dialect.templates.key_sql takes at most two '{}' placeholders".into(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DialectConfig;
    use crate::drivers::MysqlDialect;

    fn builtin(engine: &str) -> Config {
        Config {
            dialect: DialectConfig {
                engine: engine.to_string(),
                name: None,
                templates: None,
            },
        }
    }

    fn valid_custom() -> Config {
        Config {
            dialect: DialectConfig {
                engine: "custom".to_string(),
                name: Some("h2".to_string()),
                templates: Some(MysqlDialect::templates()),
            },
        }
    }

    #[test]
    fn test_valid_builtin_configs() {
        for engine in ["mysql", "sqlite", "pg", "oracle", "mssql"] {
            assert!(validate(&builtin(engine)).is_ok(), "engine {}", engine);
        }
    }

    #[test]
    fn test_valid_custom_config() {
        assert!(validate(&valid_custom()).is_ok());
    }

    #[test]
    fn test_missing_engine() {
        assert!(matches!(
            validate(&builtin("  ")),
            Err(DialectError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_engine() {
        assert!(matches!(
            validate(&builtin("db2")),
            Err(DialectError::UnknownEngine(_))
        ));
    }

    #[test]
    fn test_builtin_rejects_templates() {
        let mut config = builtin("mysql");
        config.dialect.templates = Some(MysqlDialect::templates());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_custom_requires_name() {
        let mut config = valid_custom();
        config.dialect.name = None;
        assert!(validate(&config).is_err());

        config.dialect.name = Some(String::new());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_custom_requires_templates() {
        let mut config = valid_custom();
        config.dialect.templates = None;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_required_template() {
        let mut config = valid_custom();
        if let Some(templates) = config.dialect.templates.as_mut() {
            templates.schema_sql = " ".to_string();
        }
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("schema_sql"));
    }

    #[test]
    fn test_placeholder_limits() {
        let mut config = valid_custom();
        if let Some(templates) = config.dialect.templates.as_mut() {
            templates.sequence_sql = "SELECT '{}', '{}'".to_string();
        }
        assert!(validate(&config).is_err());

        let mut config = valid_custom();
        if let Some(templates) = config.dialect.templates.as_mut() {
            templates.key_sql = Some("SELECT '{}', '{}', '{}'".to_string());
        }
        assert!(validate(&config).is_err());
    }
}
