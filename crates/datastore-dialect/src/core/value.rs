//! Loosely-typed result values and rows.
//!
//! Managers hand rows back in whatever shape the engine produced: some label
//! every column (`SELECT ... AS name`), some return positional tuples
//! (`PRAGMA database_list`). [`Row`] carries both the values and, when known,
//! their column labels so dialects can pick either by position or by label.

use std::fmt;

use crate::error::{DialectError, Result};

/// SQL value as returned by a manager or bound as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 32-bit signed integer (int).
    I32(i32),

    /// 64-bit signed integer (bigint).
    I64(i64),

    /// 64-bit floating point (double precision/float8).
    F64(f64),

    /// Text/string data.
    Text(String),

    /// Binary data.
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Render the value as a string, the way drivers stringify loosely-typed
    /// columns. NULL becomes the empty string.
    #[must_use]
    pub fn as_string(&self) -> String {
        match self {
            SqlValue::Null => String::new(),
            SqlValue::Bool(v) => v.to_string(),
            SqlValue::I32(v) => v.to_string(),
            SqlValue::I64(v) => v.to_string(),
            SqlValue::F64(v) => v.to_string(),
            SqlValue::Text(v) => v.clone(),
            SqlValue::Bytes(v) => String::from_utf8_lossy(v).into_owned(),
        }
    }

    /// Convert to a 64-bit integer.
    ///
    /// Integral floats and numeric text are accepted since several engines
    /// report sequence values as DECIMAL or text.
    pub fn to_i64(&self) -> Result<i64> {
        match self {
            SqlValue::I32(v) => Ok(i64::from(*v)),
            SqlValue::I64(v) => Ok(*v),
            SqlValue::F64(v)
                if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64 =>
            {
                Ok(*v as i64)
            }
            SqlValue::Text(v) => v
                .trim()
                .parse::<i64>()
                .map_err(|_| DialectError::decode(format!("{:?}", v), "i64")),
            SqlValue::Bytes(v) => std::str::from_utf8(v)
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .ok_or_else(|| DialectError::decode(format!("{:?}", v), "i64")),
            other => Err(DialectError::decode(other, "i64")),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            other => f.write_str(&other.as_string()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::I32(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

/// One result row.
///
/// `columns` is either empty (positional tuple) or has one label per value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Create a labelled row. Labels beyond the value count are ignored.
    pub fn new(columns: Vec<String>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    /// Create an unlabelled (positional) row.
    pub fn from_values(values: Vec<SqlValue>) -> Self {
        Self {
            columns: Vec::new(),
            values,
        }
    }

    /// Create a single-column row labelled `name`.
    pub fn named(value: impl Into<SqlValue>) -> Self {
        Self::new(vec!["name".to_string()], vec![value.into()])
    }

    /// Value at a positional index.
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Value at a positional index, or [`DialectError::MissingColumn`].
    pub fn require(&self, index: usize) -> Result<&SqlValue> {
        self.values.get(index).ok_or(DialectError::MissingColumn {
            index,
            width: self.values.len(),
        })
    }

    /// Value of the column with the given label (ASCII case-insensitive,
    /// since Oracle upper-cases unquoted aliases).
    pub fn get_named(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(column))
            .and_then(|idx| self.values.get(idx))
    }

    /// Column labels (empty for positional rows).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All values in column order.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Number of values in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
