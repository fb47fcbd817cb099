//! Query logging.

use std::borrow::Cow;

use tracing::Level;

use crate::serializer::SerializedQuery;

/// Where and how loudly a database reports the queries it runs.
///
/// Each executed query becomes one `tracing` event carrying the logger's
/// label, the SQL and the binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    label: Cow<'static, str>,
    level: Level,
}

impl Logger {
    /// Creates a logger reporting at DEBUG.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            level: Level::DEBUG,
        }
    }

    /// Sets the level queries are reported at.
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the level queries are reported at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Reports a query about to be executed.
    pub fn log_query(&self, query: &SerializedQuery) {
        let label = self.label.as_ref();
        let sql = query.sql.as_str();
        let binds = &query.binds;
        match self.level {
            Level::ERROR => tracing::error!(logger = label, sql, ?binds, "executing query"),
            Level::WARN => tracing::warn!(logger = label, sql, ?binds, "executing query"),
            Level::INFO => tracing::info!(logger = label, sql, ?binds, "executing query"),
            Level::DEBUG => tracing::debug!(logger = label, sql, ?binds, "executing query"),
            _ => tracing::trace!(logger = label, sql, ?binds, "executing query"),
        }
    }
}
