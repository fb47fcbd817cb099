//! `SELECT` builder.

use super::{SqlPredicateBuilder, SqlQueryBuilder, SqlQueryFetcher};
use crate::ast::{
    boxed, BoxedExpression, SqlColumn, SqlDirection, SqlExpression, SqlIdentifier, SqlJoin,
    SqlJoinMethod, SqlLiteral, SqlLockingClause, SqlOrderBy, SqlSelect,
};
use crate::database::SqlDatabase;

/// Builds a [`SqlSelect`].
///
/// Calls may come in any order; the statement is always written in SQL
/// grammar order.
pub struct SqlSelectBuilder<'d, D: SqlDatabase> {
    select: SqlSelect,
    database: &'d D,
}

impl<'d, D: SqlDatabase> SqlSelectBuilder<'d, D> {
    /// Creates a builder with an empty `SELECT`.
    pub fn new(database: &'d D) -> Self {
        Self {
            select: SqlSelect::new(),
            database,
        }
    }

    /// Returns the statement built so far.
    pub const fn select(&self) -> &SqlSelect {
        &self.select
    }

    /// Consumes the builder, returning the statement.
    pub fn into_select(self) -> SqlSelect {
        self.select
    }

    /// Adds a column. `"*"` selects all columns and `"table.column"` is
    /// qualified.
    #[must_use]
    pub fn column(mut self, name: &str) -> Self {
        let column: BoxedExpression = if name == "*" {
            boxed(SqlLiteral::All)
        } else {
            boxed(SqlColumn::from(name))
        };
        self.select.columns.push(column);
        self
    }

    /// Adds several columns.
    #[must_use]
    pub fn columns(self, names: &[&str]) -> Self {
        names.iter().fold(self, |builder, name| builder.column(name))
    }

    /// Adds an arbitrary projection expression.
    #[must_use]
    pub fn column_expr(mut self, expr: impl SqlExpression + 'static) -> Self {
        self.select.columns.push(boxed(expr));
        self
    }

    /// Sets DISTINCT.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.select.is_distinct = true;
        self
    }

    /// Adds a table to the FROM clause.
    #[must_use]
    pub fn from(self, table: &str) -> Self {
        self.from_expr(SqlIdentifier::new(table))
    }

    /// Adds an arbitrary FROM target, e.g. an aliased subquery.
    #[must_use]
    pub fn from_expr(mut self, table: impl SqlExpression + 'static) -> Self {
        self.select.tables.push(boxed(table));
        self
    }

    /// Adds `<method> table ON condition`.
    #[must_use]
    pub fn join(
        self,
        table: &str,
        method: SqlJoinMethod,
        condition: impl SqlExpression + 'static,
    ) -> Self {
        self.join_expr(SqlJoin::new(method, SqlIdentifier::new(table), condition))
    }

    /// Adds a complete join clause.
    #[must_use]
    pub fn join_expr(mut self, join: impl SqlExpression + 'static) -> Self {
        self.select.joins.push(boxed(join));
        self
    }

    /// Adds a GROUP BY column.
    #[must_use]
    pub fn group_by(mut self, column: &str) -> Self {
        self.select.group_by.push(boxed(SqlColumn::from(column)));
        self
    }

    /// Sets the HAVING clause.
    #[must_use]
    pub fn having_expr(mut self, expr: impl SqlExpression + 'static) -> Self {
        self.select.having = Some(boxed(expr));
        self
    }

    /// Adds an ORDER BY column.
    #[must_use]
    pub fn order_by(mut self, column: &str, direction: SqlDirection) -> Self {
        self.select
            .order_by
            .push(boxed(SqlOrderBy::new(SqlColumn::from(column), direction)));
        self
    }

    /// Sets the LIMIT clause.
    #[must_use]
    pub const fn limit(mut self, n: u64) -> Self {
        self.select.limit = Some(n);
        self
    }

    /// Sets the OFFSET clause.
    #[must_use]
    pub const fn offset(mut self, n: u64) -> Self {
        self.select.offset = Some(n);
        self
    }

    /// Appends `FOR UPDATE` (or nothing, if the dialect has no locking).
    #[must_use]
    pub fn for_update(self) -> Self {
        self.lock(SqlLockingClause::Update)
    }

    /// Appends a shared lock (or nothing, if the dialect has no locking).
    #[must_use]
    pub fn for_share(self) -> Self {
        self.lock(SqlLockingClause::Share)
    }

    /// Sets the locking clause.
    #[must_use]
    pub fn lock(mut self, clause: SqlLockingClause) -> Self {
        self.select.locking_clause = Some(boxed(clause));
        self
    }
}

impl<D: SqlDatabase> SqlPredicateBuilder for SqlSelectBuilder<'_, D> {
    fn predicate_mut(&mut self) -> &mut Option<BoxedExpression> {
        &mut self.select.predicate
    }
}

impl<D: SqlDatabase> SqlQueryBuilder for SqlSelectBuilder<'_, D> {
    type Database = D;

    fn query(&self) -> &dyn SqlExpression {
        &self.select
    }

    fn database(&self) -> &D {
        self.database
    }
}

impl<D: SqlDatabase> SqlQueryFetcher for SqlSelectBuilder<'_, D> {}
