//! A [`Manager`] that records calls and replays scripted responses.
//!
//! Used for dry runs (print the SQL a dialect would issue without touching a
//! database) and as the test double throughout this crate.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tracing::trace;

use crate::error::{DialectError, Result};

use super::traits::{ExecResult, Manager};
use super::value::{Row, SqlValue};

/// A call received by a [`RecordingManager`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Execute { sql: String },
    ReadAll { query: String, params: Vec<SqlValue> },
    ReadSingle { query: String, params: Vec<SqlValue> },
}

impl Call {
    /// SQL text of the call.
    pub fn sql(&self) -> &str {
        match self {
            Call::Execute { sql } => sql,
            Call::ReadAll { query, .. } | Call::ReadSingle { query, .. } => query,
        }
    }
}

/// Recording manager with FIFO-scripted responses.
///
/// Reads (both `read_all` and `read_single`) consume the read queue,
/// statements consume the execute queue. An exhausted queue answers with an
/// empty result set or a zero-row execution.
#[derive(Debug, Default)]
pub struct RecordingManager {
    calls: Mutex<Vec<Call>>,
    reads: Mutex<VecDeque<Result<Vec<Row>>>>,
    executes: Mutex<VecDeque<Result<ExecResult>>>,
}

impl RecordingManager {
    /// Create a manager with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful read returning `rows`.
    pub fn with_rows(self, rows: Vec<Row>) -> Self {
        self.reads.lock().push_back(Ok(rows));
        self
    }

    /// Queue a failing read.
    pub fn with_read_error(self, message: impl Into<String>) -> Self {
        self.reads
            .lock()
            .push_back(Err(DialectError::manager(message.into())));
        self
    }

    /// Queue a failing statement.
    pub fn with_execute_error(self, message: impl Into<String>) -> Self {
        self.executes
            .lock()
            .push_back(Err(DialectError::manager(message.into())));
        self
    }

    /// Queue a successful statement affecting `rows_affected` rows.
    pub fn with_execute_ok(self, rows_affected: u64) -> Self {
        self.executes
            .lock()
            .push_back(Ok(ExecResult::new(rows_affected)));
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// SQL of every executed statement, in order.
    pub fn statements(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Call::Execute { sql } => Some(sql.clone()),
                _ => None,
            })
            .collect()
    }

    /// SQL of every read query, in order.
    pub fn queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|c| !matches!(c, Call::Execute { .. }))
            .map(|c| c.sql().to_string())
            .collect()
    }

    fn next_read(&self) -> Result<Vec<Row>> {
        self.reads.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

impl Manager for RecordingManager {
    fn execute(&self, sql: &str) -> Result<ExecResult> {
        trace!("recorded statement: {}", sql);
        self.calls.lock().push(Call::Execute {
            sql: sql.to_string(),
        });
        self.executes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(ExecResult::default()))
    }

    fn read_all(&self, query: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        trace!("recorded query: {}", query);
        self.calls.lock().push(Call::ReadAll {
            query: query.to_string(),
            params: params.to_vec(),
        });
        self.next_read()
    }

    fn read_single(&self, query: &str, params: &[SqlValue]) -> Result<Option<Row>> {
        trace!("recorded single-row query: {}", query);
        self.calls.lock().push(Call::ReadSingle {
            query: query.to_string(),
            params: params.to_vec(),
        });
        Ok(self.next_read()?.into_iter().next())
    }
}
