//! MySQL dialect.

use super::SqlDialect;
use crate::ast::SqlLockingClause;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn locking_clause(&self, clause: SqlLockingClause) -> Option<&'static str> {
        match clause {
            SqlLockingClause::Update => Some("FOR UPDATE"),
            SqlLockingClause::Share => Some("LOCK IN SHARE MODE"),
        }
    }
}
