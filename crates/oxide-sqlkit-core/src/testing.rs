//! An in-memory driver for tests.
//!
//! [`RecordingDatabase`] remembers every query it is asked to run and
//! answers each one with the same canned rows.

use std::sync::{Mutex, PoisonError};

use crate::database::{BoxFuture, RowHandler, SqlDatabase};
use crate::dialect::SqlDialect;
use crate::error::{Result, SqlError};
use crate::logger::Logger;
use crate::row::SqlRow;
use crate::serializer::SerializedQuery;
use crate::value::SqlValue;

/// A row held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRow {
    values: Vec<(String, SqlValue)>,
}

impl MemoryRow {
    /// Creates a row from `(column, value)` pairs, in column order.
    pub fn new<'a>(values: impl IntoIterator<Item = (&'a str, SqlValue)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(column, value)| (column.to_string(), value))
                .collect(),
        }
    }
}

impl SqlRow for MemoryRow {
    fn columns(&self) -> Vec<String> {
        self.values.iter().map(|(column, _)| column.clone()).collect()
    }

    fn value(&self, column: &str) -> Option<SqlValue> {
        self.values
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, value)| value.clone())
    }
}

/// A database that records queries and replays canned rows.
pub struct RecordingDatabase {
    dialect: Box<dyn SqlDialect>,
    logger: Logger,
    rows: Vec<MemoryRow>,
    fail_after: Option<usize>,
    executed: Mutex<Vec<SerializedQuery>>,
}

impl RecordingDatabase {
    /// Creates a database that returns no rows.
    pub fn new(dialect: impl SqlDialect + 'static) -> Self {
        Self {
            dialect: Box::new(dialect),
            logger: Logger::new("oxide_sqlkit::testing"),
            rows: Vec::new(),
            fail_after: None,
            executed: Mutex::new(Vec::new()),
        }
    }

    /// Sets the rows every query returns.
    #[must_use]
    pub fn with_rows(mut self, rows: Vec<MemoryRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Makes every query fail with a driver error after delivering `rows`
    /// rows.
    #[must_use]
    pub const fn failing_after(mut self, rows: usize) -> Self {
        self.fail_after = Some(rows);
        self
    }

    /// Returns the queries run so far, oldest first.
    pub fn executed(&self) -> Vec<SerializedQuery> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SqlDatabase for RecordingDatabase {
    type Row = MemoryRow;

    fn logger(&self) -> &Logger {
        &self.logger
    }

    fn dialect(&self) -> &dyn SqlDialect {
        self.dialect.as_ref()
    }

    fn execute_sql<'a>(
        &'a self,
        query: SerializedQuery,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.executed
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(query);
            for (delivered, row) in self.rows.iter().enumerate() {
                if self.fail_after == Some(delivered) {
                    return Err(SqlError::driver(std::io::Error::other(
                        "connection reset",
                    )));
                }
                on_row(row.clone());
            }
            match self.fail_after {
                Some(n) if n >= self.rows.len() => Err(SqlError::driver(
                    std::io::Error::other("connection reset"),
                )),
                _ => Ok(()),
            }
        })
    }
}
