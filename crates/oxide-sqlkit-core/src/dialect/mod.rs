//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. The serializer asks
//! the dialect whenever a node needs a placeholder, a quoted identifier, a
//! literal or a locking clause.

mod generic;
mod mysql;
mod postgres;

pub use generic::GenericDialect;
pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;

use crate::ast::SqlLockingClause;

/// Trait for SQL dialect-specific behavior.
pub trait SqlDialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character (e.g., `"` for standard SQL, `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling any embedded quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Returns the placeholder for the bind at `position` (1-based).
    fn bind_placeholder(&self, _position: usize) -> String {
        String::from("?")
    }

    /// Returns the literal for a boolean.
    fn literal_boolean(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    /// Returns the literal that stands for a column default.
    fn literal_default(&self) -> &'static str {
        "DEFAULT"
    }

    /// Returns the text of a locking clause, or `None` if the dialect has no
    /// such clause (the node then emits nothing).
    fn locking_clause(&self, clause: SqlLockingClause) -> Option<&'static str> {
        match clause {
            SqlLockingClause::Update => Some("FOR UPDATE"),
            SqlLockingClause::Share => Some("FOR SHARE"),
        }
    }

    /// Returns whether the dialect supports RETURNING clause.
    fn supports_returning(&self) -> bool {
        false
    }
}
