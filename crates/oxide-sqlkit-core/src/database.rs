//! The execution boundary.
//!
//! A [`SqlDatabase`] turns an expression tree into SQL with its own dialect,
//! reports it through its own logger and hands it to the driver, which calls
//! back once per result row.

use std::future::Future;
use std::pin::Pin;

use crate::ast::SqlExpression;
use crate::builder::{
    SqlDeleteBuilder, SqlInsertBuilder, SqlSelectBuilder, SqlStatement, SqlUpdateBuilder,
};
use crate::dialect::SqlDialect;
use crate::error::Result;
use crate::logger::Logger;
use crate::row::SqlRow;
use crate::serializer::{self, SerializedQuery};

/// A boxed future for async database operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A row callback. Invoked synchronously, once per row, in delivery order.
pub type RowHandler<'a, R> = &'a mut (dyn FnMut(R) + Send);

/// A database that can run serialized queries.
///
/// Drivers implement [`logger`](Self::logger), [`dialect`](Self::dialect)
/// and [`execute_sql`](Self::execute_sql). Everything else is provided.
///
/// # Example
///
/// ```ignore
/// let rows = database
///     .select()
///     .columns(&["id", "name"])
///     .from("users")
///     .where_column("age", SqlBinaryOperator::GreaterThan, 18)
///     .all()
///     .await?;
/// ```
pub trait SqlDatabase: Send + Sync {
    /// The driver's row type.
    type Row: SqlRow;

    /// The logger queries are reported through.
    fn logger(&self) -> &Logger;

    /// The dialect queries are serialized for.
    fn dialect(&self) -> &dyn SqlDialect;

    /// Runs `query` and calls `on_row` for every produced row, in the order
    /// the database delivers them.
    ///
    /// Driver errors are returned as [`SqlError::Driver`](crate::SqlError::Driver).
    fn execute_sql<'a>(
        &'a self,
        query: SerializedQuery,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, Result<()>>;

    /// Serializes `expr` with this database's dialect.
    fn serialize(&self, expr: &dyn SqlExpression) -> SerializedQuery {
        serializer::serialize(expr, self.dialect())
    }

    /// Serializes and logs `expr`, then runs it.
    fn execute<'a>(
        &'a self,
        expr: &dyn SqlExpression,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, Result<()>> {
        let query = self.serialize(expr);
        self.logger().log_query(&query);
        self.execute_sql(query, on_row)
    }

    /// Borrows this database with queries reported through `logger`.
    fn logging(&self, logger: Logger) -> LoggingDatabase<&Self>
    where
        Self: Sized,
    {
        LoggingDatabase::new(self, logger)
    }
}

impl<D: SqlDatabase + ?Sized> SqlDatabase for &D {
    type Row = D::Row;

    fn logger(&self) -> &Logger {
        (**self).logger()
    }

    fn dialect(&self) -> &dyn SqlDialect {
        (**self).dialect()
    }

    fn execute_sql<'a>(
        &'a self,
        query: SerializedQuery,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, Result<()>> {
        (**self).execute_sql(query, on_row)
    }
}

/// A database with its logger replaced.
///
/// Only [`logger`](SqlDatabase::logger) differs from the wrapped database;
/// the dialect and the driver are the wrapped database's, so SQL, binds and
/// rows are exactly what the wrapped database would produce.
#[derive(Debug, Clone)]
pub struct LoggingDatabase<D> {
    database: D,
    logger: Logger,
}

impl<D: SqlDatabase> LoggingDatabase<D> {
    /// Wraps `database`, reporting queries through `logger`.
    pub const fn new(database: D, logger: Logger) -> Self {
        Self { database, logger }
    }

    /// Returns the wrapped database.
    pub const fn inner(&self) -> &D {
        &self.database
    }
}

impl<D: SqlDatabase> SqlDatabase for LoggingDatabase<D> {
    type Row = D::Row;

    fn logger(&self) -> &Logger {
        &self.logger
    }

    fn dialect(&self) -> &dyn SqlDialect {
        self.database.dialect()
    }

    fn execute_sql<'a>(
        &'a self,
        query: SerializedQuery,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, Result<()>> {
        self.database.execute_sql(query, on_row)
    }
}

/// Statement builders available on every database.
pub trait SqlDatabaseExt: SqlDatabase + Sized {
    /// Starts a `SELECT`.
    fn select(&self) -> SqlSelectBuilder<'_, Self> {
        SqlSelectBuilder::new(self)
    }

    /// Starts an `INSERT INTO table`.
    fn insert_into(&self, table: &str) -> SqlInsertBuilder<'_, Self> {
        SqlInsertBuilder::new(self, table)
    }

    /// Starts an `UPDATE table`.
    fn update(&self, table: &str) -> SqlUpdateBuilder<'_, Self> {
        SqlUpdateBuilder::new(self, table)
    }

    /// Starts a `DELETE FROM table`.
    fn delete_from(&self, table: &str) -> SqlDeleteBuilder<'_, Self> {
        SqlDeleteBuilder::new(self, table)
    }

    /// Wraps an arbitrary expression so it can be run and fetched.
    fn statement(&self, expr: impl SqlExpression + 'static) -> SqlStatement<'_, Self> {
        SqlStatement::new(self, expr)
    }
}

impl<D: SqlDatabase> SqlDatabaseExt for D {}
