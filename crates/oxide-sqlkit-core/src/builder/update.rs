//! `UPDATE` builder.

use super::{SqlPredicateBuilder, SqlQueryBuilder, SqlQueryFetcher};
use crate::ast::{
    boxed, BoxedExpression, SqlBinaryExpression, SqlBinaryOperator, SqlBind, SqlColumn,
    SqlExpression, SqlIdentifier, SqlUpdate,
};
use crate::database::SqlDatabase;
use crate::value::ToSqlValue;

/// Builds a [`SqlUpdate`].
pub struct SqlUpdateBuilder<'d, D: SqlDatabase> {
    update: SqlUpdate,
    database: &'d D,
}

impl<'d, D: SqlDatabase> SqlUpdateBuilder<'d, D> {
    /// Creates a builder for `UPDATE table`.
    pub fn new(database: &'d D, table: &str) -> Self {
        Self {
            update: SqlUpdate::new(SqlIdentifier::new(table)),
            database,
        }
    }

    /// Adds `column = value`. The value is bound.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl ToSqlValue) -> Self {
        self.update.values.push(boxed(SqlBinaryExpression::new(
            SqlColumn::new(column),
            SqlBinaryOperator::Equal,
            SqlBind::new(value),
        )));
        self
    }

    /// Adds columns to return, if the dialect supports `RETURNING`.
    #[must_use]
    pub fn returning(mut self, names: &[&str]) -> Self {
        self.update
            .returning
            .extend(names.iter().map(|name| boxed(SqlColumn::new(*name))));
        self
    }
}

impl<D: SqlDatabase> SqlPredicateBuilder for SqlUpdateBuilder<'_, D> {
    fn predicate_mut(&mut self) -> &mut Option<BoxedExpression> {
        &mut self.update.predicate
    }
}

impl<D: SqlDatabase> SqlQueryBuilder for SqlUpdateBuilder<'_, D> {
    type Database = D;

    fn query(&self) -> &dyn SqlExpression {
        &self.update
    }

    fn database(&self) -> &D {
        self.database
    }
}

impl<D: SqlDatabase> SqlQueryFetcher for SqlUpdateBuilder<'_, D> {}
