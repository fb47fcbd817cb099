//! SQLite dialect implementation.

use oxide_sqlkit_core::ast::SqlLockingClause;
use oxide_sqlkit_core::dialect::SqlDialect;

/// SQLite dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> char {
        '"' // SQLite also accepts backticks, but double quotes are standard
    }

    fn literal_default(&self) -> &'static str {
        // `DEFAULT` is not accepted inside a VALUES row.
        "NULL"
    }

    fn locking_clause(&self, _clause: SqlLockingClause) -> Option<&'static str> {
        None
    }

    fn supports_returning(&self) -> bool {
        true // SQLite 3.35.0+
    }
}
