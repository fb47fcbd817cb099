//! sqlx-backed [`SqlDatabase`].

use futures::TryStreamExt;
use oxide_sqlkit_core::database::{BoxFuture, RowHandler};
use oxide_sqlkit_core::dialect::SqlDialect;
use oxide_sqlkit_core::{Logger, SerializedQuery, SqlDatabase, SqlError, SqlValue};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use crate::config::SqliteConfig;
use crate::dialect::SqliteDialect;
use crate::error::Result;
use crate::row::SqliteRow;

/// A SQLite connection pool speaking the [`SqliteDialect`].
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
    logger: Logger,
    dialect: SqliteDialect,
}

impl SqliteDatabase {
    /// Opens a pool as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub async fn connect(config: &SqliteConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        info!(
            url = %config.url,
            max_connections = config.max_connections,
            "connected to sqlite"
        );
        Ok(Self::from_pool(pool).with_logger(Logger::new(config.logger_label.clone())))
    }

    /// Builds a pool that opens no connection until a query runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn connect_lazy(config: &SqliteConfig) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy(&config.url)?;
        Ok(Self::from_pool(pool).with_logger(Logger::new(config.logger_label.clone())))
    }

    /// Wraps an existing pool.
    #[must_use]
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            logger: Logger::new(crate::config::DEFAULT_LOGGER_LABEL),
            dialect: SqliteDialect::new(),
        }
    }

    /// Replaces the logger.
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("sqlite pool closed");
    }
}

impl SqlDatabase for SqliteDatabase {
    type Row = SqliteRow;

    fn logger(&self) -> &Logger {
        &self.logger
    }

    fn dialect(&self) -> &dyn SqlDialect {
        &self.dialect
    }

    fn execute_sql<'a>(
        &'a self,
        query: SerializedQuery,
        on_row: RowHandler<'a, Self::Row>,
    ) -> BoxFuture<'a, oxide_sqlkit_core::Result<()>> {
        Box::pin(async move {
            let SerializedQuery { sql, binds } = query;
            let mut statement = sqlx::query(&sql);
            for value in binds {
                statement = bind_value(statement, value);
            }

            let mut rows = statement.fetch(&self.pool);
            while let Some(row) = rows.try_next().await.map_err(SqlError::driver)? {
                on_row(SqliteRow::read(&row)?);
            }
            Ok(())
        })
    }
}

fn bind_value<'q>(
    query: sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>,
    value: SqlValue,
) -> sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(b),
        SqlValue::Int(i) => query.bind(i),
        SqlValue::Float(f) => query.bind(f),
        SqlValue::Text(s) => query.bind(s),
        SqlValue::Blob(b) => query.bind(b),
    }
}

#[cfg(test)]
mod tests {
    use oxide_sqlkit_core::ast::{
        boxed, SqlAlias, SqlBind, SqlColumn, SqlFunction, SqlIdentifier, SqlInsert, SqlLiteral,
        SqlRaw,
    };
    use oxide_sqlkit_core::prelude::*;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: i64,
        name: String,
        score: Option<f64>,
    }

    async fn memory_db() -> SqliteDatabase {
        SqliteDatabase::connect(&SqliteConfig::in_memory())
            .await
            .unwrap()
    }

    async fn users_db() -> SqliteDatabase {
        let db = memory_db().await;
        db.statement(SqlRaw::new(
            "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, score REAL, avatar BLOB)",
        ))
        .run(|_| {})
        .await
        .unwrap();
        db.insert_into("users")
            .columns(&["id", "name", "score"])
            .values([1_i64.to_sql_value(), "alice".to_sql_value(), 9.5_f64.to_sql_value()])
            .values([2_i64.to_sql_value(), "bob".to_sql_value(), SqlValue::Null])
            .values([3_i64.to_sql_value(), "carol".to_sql_value(), 7.0_f64.to_sql_value()])
            .run(|_| {})
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_select_decodes_models_in_order() {
        let db = users_db().await;
        let users: Vec<User> = db
            .select()
            .columns(&["id", "name", "score"])
            .from("users")
            .order_by("id", SqlDirection::Ascending)
            .all_decoding()
            .await
            .unwrap();
        assert_eq!(
            users,
            vec![
                User {
                    id: 1,
                    name: "alice".into(),
                    score: Some(9.5),
                },
                User {
                    id: 2,
                    name: "bob".into(),
                    score: None,
                },
                User {
                    id: 3,
                    name: "carol".into(),
                    score: Some(7.0),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_booleans_read_back_into_models() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Flag {
            id: i64,
            active: bool,
        }

        let db = memory_db().await;
        db.statement(SqlRaw::new(
            "CREATE TABLE flags (id INTEGER PRIMARY KEY, active BOOLEAN)",
        ))
        .run(|_| {})
        .await
        .unwrap();
        db.insert_into("flags")
            .columns(&["id", "active"])
            .values([1_i64.to_sql_value(), true.to_sql_value()])
            .values([2_i64.to_sql_value(), false.to_sql_value()])
            .run(|_| {})
            .await
            .unwrap();

        let flags: Vec<Flag> = db
            .select()
            .column("*")
            .from("flags")
            .order_by("id", SqlDirection::Ascending)
            .all_decoding()
            .await
            .unwrap();
        assert_eq!(
            flags,
            vec![
                Flag {
                    id: 1,
                    active: true,
                },
                Flag {
                    id: 2,
                    active: false,
                },
            ]
        );

        let row = db
            .select()
            .column("active")
            .from("flags")
            .where_column("id", SqlBinaryOperator::Equal, 1)
            .first()
            .await
            .unwrap()
            .expect("flag 1");
        assert_eq!(row.value("active"), Some(SqlValue::Bool(true)));
    }

    #[tokio::test]
    async fn test_filters_are_bound() {
        let db = users_db().await;
        let row = db
            .select()
            .column("name")
            .from("users")
            .where_column("score", SqlBinaryOperator::GreaterThan, 8)
            .first()
            .await
            .unwrap()
            .expect("a matching row");
        assert_eq!(row.decode::<String>("name").unwrap(), "alice");
    }

    #[tokio::test]
    async fn test_rows_carry_storage_classes() {
        let db = users_db().await;
        db.update("users")
            .set("avatar", vec![0xde_u8, 0xad])
            .where_column("id", SqlBinaryOperator::Equal, 1)
            .run(|_| {})
            .await
            .unwrap();
        let row = db
            .select()
            .column("*")
            .from("users")
            .where_column("id", SqlBinaryOperator::Equal, 1)
            .first()
            .await
            .unwrap()
            .expect("alice");
        assert_eq!(row.columns(), vec!["id", "name", "score", "avatar"]);
        assert_eq!(row.value("id"), Some(SqlValue::Int(1)));
        assert_eq!(row.value("name"), Some(SqlValue::Text("alice".into())));
        assert_eq!(row.value("score"), Some(SqlValue::Float(9.5)));
        assert_eq!(row.value("avatar"), Some(SqlValue::Blob(vec![0xde, 0xad])));
    }

    #[tokio::test]
    async fn test_returning_and_default() {
        let db = users_db().await;
        let mut insert = SqlInsert::new(SqlIdentifier::new("users"));
        insert.columns = vec![boxed(SqlColumn::new("id")), boxed(SqlColumn::new("name"))];
        insert.values = vec![vec![boxed(SqlLiteral::Default), boxed(SqlBind::new("dave"))]];
        insert.returning = vec![boxed(SqlColumn::new("id"))];
        let row = db
            .statement(insert)
            .first()
            .await
            .unwrap()
            .expect("returned id");
        assert_eq!(row.decode::<i64>("id").unwrap(), 4);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = users_db().await;
        db.update("users")
            .set("score", 1.0)
            .where_column("name", SqlBinaryOperator::Equal, "bob")
            .run(|_| {})
            .await
            .unwrap();
        db.delete_from("users")
            .where_column("id", SqlBinaryOperator::Equal, 3)
            .run(|_| {})
            .await
            .unwrap();

        let count = db
            .select()
            .column_expr(SqlAlias::new(SqlFunction::count_all(), "n"))
            .from("users")
            .first()
            .await
            .unwrap()
            .expect("a count")
            .decode::<i64>("n")
            .unwrap();
        assert_eq!(count, 2);

        let bob = db
            .select()
            .column("score")
            .from("users")
            .where_column("name", SqlBinaryOperator::Equal, "bob")
            .first()
            .await
            .unwrap()
            .expect("bob");
        assert_eq!(bob.value("score"), Some(SqlValue::Float(1.0)));
    }

    #[tokio::test]
    async fn test_locking_is_dropped() {
        let db = users_db().await;
        let rows = db
            .select()
            .column("id")
            .from("users")
            .for_update()
            .all()
            .await
            .unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_lazy_pool_serializes_without_opening_the_file() {
        let config = SqliteConfig::new("sqlite:/nonexistent/dir/app.db");
        let db = SqliteDatabase::connect_lazy(&config).unwrap();
        let builder = db
            .select()
            .column("id")
            .from("users")
            .where_column("id", SqlBinaryOperator::Equal, 1);
        assert_eq!(
            db.serialize(builder.query()).sql,
            "SELECT \"id\" FROM \"users\" WHERE \"id\" = ?"
        );
        assert!(SqliteDatabase::connect(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_driver_errors_pass_through() {
        let db = memory_db().await;
        let err = db
            .select()
            .column("*")
            .from("missing")
            .all()
            .await
            .unwrap_err();
        assert!(matches!(err, SqlError::Driver(_)));
        assert!(err.to_string().contains("no such table"));
    }

    #[tokio::test]
    async fn test_logging_database_shares_the_pool() {
        let db = users_db().await;
        let logged = db.logging(Logger::new("audit"));
        let rows = logged
            .select()
            .column("id")
            .from("users")
            .all()
            .await
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(logged.logger().label(), "audit");
        assert_eq!(logged.dialect().name(), "sqlite");
    }
}
