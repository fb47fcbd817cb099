//! Statement builders and the fetch helpers shared by all of them.
//!
//! A builder owns the statement it is filling in and borrows the database
//! it will run on. Chained calls only mutate the statement; nothing runs
//! until one of the [`SqlQueryBuilder`] or [`SqlQueryFetcher`] methods is
//! awaited.
//!
//! # Example
//!
//! ```ignore
//! use oxide_sqlkit_core::prelude::*;
//!
//! let first = database
//!     .select()
//!     .column("*")
//!     .from("planets")
//!     .where_column("name", SqlBinaryOperator::Equal, "Earth")
//!     .first()
//!     .await?;
//! ```

mod delete;
mod insert;
mod predicate;
mod select;
mod statement;
mod update;

pub use delete::SqlDeleteBuilder;
pub use insert::SqlInsertBuilder;
pub use predicate::SqlPredicateBuilder;
pub use select::SqlSelectBuilder;
pub use statement::SqlStatement;
pub use update::SqlUpdateBuilder;

use serde::de::DeserializeOwned;

use crate::ast::SqlExpression;
use crate::database::{BoxFuture, SqlDatabase};
use crate::error::{Result, SqlError};
use crate::row::SqlRow;

/// The row type produced by a builder's database.
pub type RowOf<B> = <<B as SqlQueryBuilder>::Database as SqlDatabase>::Row;

/// Builds a query and runs it on a database.
pub trait SqlQueryBuilder: Send + Sync {
    /// The database the query runs on.
    type Database: SqlDatabase;

    /// The statement being built.
    fn query(&self) -> &dyn SqlExpression;

    /// The database the query runs on.
    fn database(&self) -> &Self::Database;

    /// Runs the query, passing each row to `on_row` as it is received.
    fn run<'a, F>(&'a self, mut on_row: F) -> BoxFuture<'a, Result<()>>
    where
        F: FnMut(RowOf<Self>) + Send + 'a,
    {
        Box::pin(async move { self.database().execute(self.query(), &mut on_row).await })
    }
}

/// A [`SqlQueryBuilder`] whose query returns rows worth collecting.
pub trait SqlQueryFetcher: SqlQueryBuilder {
    /// Collects every row, in arrival order.
    fn all(&self) -> BoxFuture<'_, Result<Vec<RowOf<Self>>>> {
        Box::pin(async move {
            let mut rows = Vec::new();
            self.run(|row| rows.push(row)).await?;
            Ok(rows)
        })
    }

    /// Returns the first row, or `None` if no row arrived.
    ///
    /// Later rows are dropped as they arrive.
    fn first(&self) -> BoxFuture<'_, Result<Option<RowOf<Self>>>> {
        Box::pin(async move {
            let mut first = None;
            self.run(|row| {
                if first.is_none() {
                    first = Some(row);
                }
            })
            .await?;
            Ok(first)
        })
    }

    /// Runs the query, decoding each row into `D` before handing it over.
    ///
    /// A row that fails to decode is passed on as an error; the rows after
    /// it are still delivered.
    fn run_decoding<'a, D, H>(&'a self, mut handler: H) -> BoxFuture<'a, Result<()>>
    where
        D: DeserializeOwned + 'a,
        H: FnMut(Result<D>) + Send + 'a,
    {
        self.run(move |row| handler(row.decode_model::<D>().map_err(SqlError::from)))
    }

    /// Decodes the first row into `D`.
    ///
    /// # Errors
    ///
    /// A decode failure of that row is returned as
    /// [`SqlError::Decode`].
    fn first_decoding<'a, D>(&'a self) -> BoxFuture<'a, Result<Option<D>>>
    where
        D: DeserializeOwned + 'a,
    {
        Box::pin(async move {
            let row = self.first().await?;
            Ok(row.map(|row| row.decode_model::<D>()).transpose()?)
        })
    }

    /// Decodes every row into `D`, in arrival order.
    ///
    /// # Errors
    ///
    /// The first row that fails to decode aborts the fetch: its error is
    /// returned and no later row is decoded. It is returned even when the
    /// driver fails afterwards.
    fn all_decoding<'a, D>(&'a self) -> BoxFuture<'a, Result<Vec<D>>>
    where
        D: DeserializeOwned + Send + 'a,
    {
        Box::pin(async move {
            let mut items = Vec::new();
            let mut failure = None;
            let result = self
                .run(|row| {
                    if failure.is_some() {
                        return;
                    }
                    match row.decode_model::<D>() {
                        Ok(item) => items.push(item),
                        Err(err) => failure = Some(err),
                    }
                })
                .await;
            if let Some(err) = failure {
                return Err(err.into());
            }
            result.map(|()| items)
        })
    }
}
