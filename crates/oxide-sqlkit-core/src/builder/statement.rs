//! Runs any expression tree.

use super::{SqlQueryBuilder, SqlQueryFetcher};
use crate::ast::{boxed, BoxedExpression, SqlExpression};
use crate::database::SqlDatabase;

/// An already-built expression bound to a database, for trees put together
/// by hand.
pub struct SqlStatement<'d, D: SqlDatabase> {
    expr: BoxedExpression,
    database: &'d D,
}

impl<'d, D: SqlDatabase> SqlStatement<'d, D> {
    /// Binds `expr` to `database`.
    pub fn new(database: &'d D, expr: impl SqlExpression + 'static) -> Self {
        Self {
            expr: boxed(expr),
            database,
        }
    }
}

impl<D: SqlDatabase> SqlQueryBuilder for SqlStatement<'_, D> {
    type Database = D;

    fn query(&self) -> &dyn SqlExpression {
        &self.expr
    }

    fn database(&self) -> &D {
        self.database
    }
}

impl<D: SqlDatabase> SqlQueryFetcher for SqlStatement<'_, D> {}
