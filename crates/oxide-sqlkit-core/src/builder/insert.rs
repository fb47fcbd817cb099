//! `INSERT` builder.

use super::{SqlQueryBuilder, SqlQueryFetcher};
use crate::ast::{boxed, SqlBind, SqlColumn, SqlExpression, SqlIdentifier, SqlInsert};
use crate::database::SqlDatabase;
use crate::value::ToSqlValue;

/// Builds a [`SqlInsert`].
pub struct SqlInsertBuilder<'d, D: SqlDatabase> {
    insert: SqlInsert,
    database: &'d D,
}

impl<'d, D: SqlDatabase> SqlInsertBuilder<'d, D> {
    /// Creates a builder for `INSERT INTO table`.
    pub fn new(database: &'d D, table: &str) -> Self {
        Self {
            insert: SqlInsert::new(SqlIdentifier::new(table)),
            database,
        }
    }

    /// Sets the column list.
    #[must_use]
    pub fn columns(mut self, names: &[&str]) -> Self {
        self.insert.columns = names
            .iter()
            .map(|name| boxed(SqlColumn::new(*name)))
            .collect();
        self
    }

    /// Adds one row of bound values, in column order.
    #[must_use]
    pub fn values<T: ToSqlValue>(mut self, row: impl IntoIterator<Item = T>) -> Self {
        self.insert
            .values
            .push(row.into_iter().map(|value| boxed(SqlBind::new(value))).collect());
        self
    }

    /// Adds columns to return, if the dialect supports `RETURNING`.
    #[must_use]
    pub fn returning(mut self, names: &[&str]) -> Self {
        self.insert
            .returning
            .extend(names.iter().map(|name| boxed(SqlColumn::new(*name))));
        self
    }
}

impl<D: SqlDatabase> SqlQueryBuilder for SqlInsertBuilder<'_, D> {
    type Database = D;

    fn query(&self) -> &dyn SqlExpression {
        &self.insert
    }

    fn database(&self) -> &D {
        self.database
    }
}

impl<D: SqlDatabase> SqlQueryFetcher for SqlInsertBuilder<'_, D> {}
