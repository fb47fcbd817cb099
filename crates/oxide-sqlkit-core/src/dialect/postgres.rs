//! PostgreSQL dialect.

use super::SqlDialect;

/// PostgreSQL dialect: numbered `$N` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn bind_placeholder(&self, position: usize) -> String {
        format!("${position}")
    }

    fn supports_returning(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SqlLockingClause;

    #[test]
    fn test_postgres_dialect() {
        let dialect = PostgresDialect::new();
        assert_eq!(dialect.name(), "postgres");
        assert_eq!(dialect.bind_placeholder(1), "$1");
        assert_eq!(dialect.bind_placeholder(12), "$12");
        assert_eq!(
            dialect.locking_clause(SqlLockingClause::Share),
            Some("FOR SHARE")
        );
        assert!(dialect.supports_returning());
    }
}
