//! # oxide-sqlkit-sqlite
//!
//! SQLite driver for `oxide-sqlkit-core`, built on sqlx.
//!
//! # How SQLite differs from other dialects
//!
//! - **Placeholders**: every bind is written as `?`; SQLite numbers them by
//!   position.
//! - **[RETURNING]**: supported on INSERT, UPDATE and DELETE (since SQLite
//!   3.35.0).
//! - **No row locking**: `FOR UPDATE` / `FOR SHARE` requests are dropped
//!   from the statement.
//! - **Defaults**: `DEFAULT` is not accepted inside a VALUES row and is
//!   written as `NULL`.
//! - **[Type affinity]**: any column can hold any storage class, so rows are
//!   decoded by the storage class of each value. The one exception is a
//!   column declared `BOOLEAN`, whose integers are read back as booleans.
//!
//! [RETURNING]: https://www.sqlite.org/lang_returning.html
//! [Type affinity]: https://www.sqlite.org/datatype3.html
//!
//! ## Example
//!
//! ```rust,no_run
//! use oxide_sqlkit_core::prelude::*;
//! use oxide_sqlkit_sqlite::{SqliteConfig, SqliteDatabase};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = SqliteDatabase::connect(&SqliteConfig::new("sqlite:app.db")).await?;
//! let adults = db
//!     .select()
//!     .columns(&["id", "name"])
//!     .from("users")
//!     .where_column("age", SqlBinaryOperator::GreaterThanOrEqual, 18)
//!     .all()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
mod dialect;
pub mod error;
pub mod row;

pub use config::SqliteConfig;
pub use database::SqliteDatabase;
pub use dialect::SqliteDialect;
pub use error::{Result, SqliteError};
pub use row::SqliteRow;
