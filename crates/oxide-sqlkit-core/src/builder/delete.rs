//! `DELETE` builder.

use super::{SqlPredicateBuilder, SqlQueryBuilder, SqlQueryFetcher};
use crate::ast::{boxed, BoxedExpression, SqlColumn, SqlDelete, SqlExpression, SqlIdentifier};
use crate::database::SqlDatabase;

/// Builds a [`SqlDelete`].
pub struct SqlDeleteBuilder<'d, D: SqlDatabase> {
    delete: SqlDelete,
    database: &'d D,
}

impl<'d, D: SqlDatabase> SqlDeleteBuilder<'d, D> {
    /// Creates a builder for `DELETE FROM table`.
    pub fn new(database: &'d D, table: &str) -> Self {
        Self {
            delete: SqlDelete::new(SqlIdentifier::new(table)),
            database,
        }
    }

    /// Adds columns to return, if the dialect supports `RETURNING`.
    #[must_use]
    pub fn returning(mut self, names: &[&str]) -> Self {
        self.delete
            .returning
            .extend(names.iter().map(|name| boxed(SqlColumn::new(*name))));
        self
    }
}

impl<D: SqlDatabase> SqlPredicateBuilder for SqlDeleteBuilder<'_, D> {
    fn predicate_mut(&mut self) -> &mut Option<BoxedExpression> {
        &mut self.delete.predicate
    }
}

impl<D: SqlDatabase> SqlQueryBuilder for SqlDeleteBuilder<'_, D> {
    type Database = D;

    fn query(&self) -> &dyn SqlExpression {
        &self.delete
    }

    fn database(&self) -> &D {
        self.database
    }
}

impl<D: SqlDatabase> SqlQueryFetcher for SqlDeleteBuilder<'_, D> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SqlBinaryOperator;
    use crate::database::SqlDatabaseExt;
    use crate::dialect::GenericDialect;
    use crate::testing::RecordingDatabase;

    #[test]
    fn test_delete_where() {
        let db = RecordingDatabase::new(GenericDialect::new());
        let builder = db
            .delete_from("sessions")
            .where_column("expires_at", SqlBinaryOperator::LessThan, 1_700_000_000_i64)
            .returning(&["id"]);
        let query = db.serialize(builder.query());
        // GenericDialect has no RETURNING.
        assert_eq!(
            query.sql,
            "DELETE FROM \"sessions\" WHERE \"expires_at\" < ?"
        );
    }
}
