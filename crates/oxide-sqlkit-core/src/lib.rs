//! # oxide-sqlkit-core
//!
//! A database-agnostic SQL toolkit: build statements as expression trees,
//! serialize them for a dialect and run them through an async driver.
//!
//! This crate provides:
//! - An expression tree ([`ast`]) whose nodes write their own SQL and binds
//! - A serializer that numbers placeholders in the order binds are written
//! - Dialects for generic SQL, PostgreSQL and MySQL
//! - The [`SqlDatabase`] execution boundary, with per-database logging
//! - Fluent statement builders and row decoding
//!
//! Drivers live in their own crates and only implement
//! [`SqlDatabase::execute_sql`].
//!
//! ## Building a query
//!
//! Chained calls may come in any order; clauses always come out in SQL
//! order, and bind positions match the order values appear in the text:
//!
//! ```rust
//! use oxide_sqlkit_core::dialect::PostgresDialect;
//! use oxide_sqlkit_core::prelude::*;
//! use oxide_sqlkit_core::testing::RecordingDatabase;
//!
//! let db = RecordingDatabase::new(PostgresDialect::new());
//! let select = db
//!     .select()
//!     .limit(10)
//!     .where_column("age", SqlBinaryOperator::GreaterThan, 18)
//!     .columns(&["id", "name"])
//!     .from("users");
//!
//! let query = db.serialize(select.query());
//! assert_eq!(
//!     query.sql,
//!     r#"SELECT "id", "name" FROM "users" WHERE "age" > $1 LIMIT 10"#
//! );
//! assert_eq!(query.binds, vec![SqlValue::Int(18)]);
//! ```

pub mod ast;
pub mod builder;
pub mod database;
pub mod dialect;
pub mod error;
pub mod logger;
pub mod row;
pub mod serializer;
pub mod testing;
pub mod value;

pub use database::{LoggingDatabase, SqlDatabase, SqlDatabaseExt};
pub use error::{DecodeError, Result, SqlError};
pub use logger::Logger;
pub use row::SqlRow;
pub use serializer::{SerializedQuery, SqlSerializer};
pub use value::{FromSqlValue, SqlValue, ToSqlValue};

/// The traits and types most programs need.
pub mod prelude {
    pub use crate::ast::{
        SqlBinaryOperator, SqlDirection, SqlExpression, SqlJoinMethod, SqlLockingClause,
    };
    pub use crate::builder::{SqlPredicateBuilder, SqlQueryBuilder, SqlQueryFetcher};
    pub use crate::database::{SqlDatabase, SqlDatabaseExt};
    pub use crate::dialect::SqlDialect;
    pub use crate::logger::Logger;
    pub use crate::row::SqlRow;
    pub use crate::value::{SqlValue, ToSqlValue};
}
