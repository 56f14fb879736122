//! Error types for the dialect library.

use thiserror::Error;

/// Boxed error produced by a [`Manager`](crate::core::Manager) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for dialect operations.
#[derive(Error, Debug)]
pub enum DialectError {
    /// Execution or read failure reported by the manager, passed through unchanged.
    #[error(transparent)]
    Manager(BoxError),

    /// A result row is narrower than the configured name column.
    #[error("Result row has {width} column(s), expected a value at index {index}")]
    MissingColumn { index: usize, width: usize },

    /// A result value could not be converted to the requested type.
    #[error("Cannot decode {value} as {expected}")]
    Decode { value: String, expected: &'static str },

    /// Configuration error (invalid YAML, bad templates, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Engine name not recognized.
    #[error("Unknown database engine: '{0}'. Supported engines: mysql, sqlite, postgres, oracle, sqlserver")]
    UnknownEngine(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialectError {
    /// Wrap a manager-side error without altering its message.
    pub fn manager(err: impl Into<BoxError>) -> Self {
        DialectError::Manager(err.into())
    }

    /// Create a Decode error
    pub fn decode(value: impl std::fmt::Display, expected: &'static str) -> Self {
        DialectError::Decode {
            value: value.to_string(),
            expected,
        }
    }

    /// Process exit code used by the CLI for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            DialectError::Config(_) | DialectError::UnknownEngine(_) | DialectError::Yaml(_) => 1,
            DialectError::Manager(_) => 2,
            DialectError::MissingColumn { .. } | DialectError::Decode { .. } => 3,
            DialectError::Json(_) => 4,
            DialectError::Io(_) => 7,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
