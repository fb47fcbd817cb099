//! Connection settings.

/// Label used for query logging when none is configured.
pub const DEFAULT_LOGGER_LABEL: &str = "oxide_sqlkit::sqlite";

/// How to reach a SQLite database.
///
/// Every pooled connection to `sqlite::memory:` opens its own empty
/// database, so the in-memory default uses a single connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteConfig {
    /// Connection URL, e.g. `sqlite:app.db` or `sqlite::memory:`.
    pub url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Label attached to every logged query.
    pub logger_label: String,
}

impl SqliteConfig {
    /// Settings for `url` with a pool of five connections.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            logger_label: DEFAULT_LOGGER_LABEL.to_string(),
        }
    }

    /// Settings for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:").with_max_connections(1)
    }

    /// Sets the pool size.
    #[must_use]
    pub const fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Sets the logging label.
    #[must_use]
    pub fn with_logger_label(mut self, label: impl Into<String>) -> Self {
        self.logger_label = label.into();
        self
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_connection_in_memory() {
        let config = SqliteConfig::default();
        assert_eq!(config.url, "sqlite::memory:");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.logger_label, DEFAULT_LOGGER_LABEL);
    }

    #[test]
    fn test_file_config() {
        let config = SqliteConfig::new("sqlite:app.db").with_logger_label("app");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.logger_label, "app");
    }
}
