//! Error types for the SQLite driver.

use oxide_sqlkit_core::{DecodeError, SqlError};

/// Errors raised while connecting to SQLite or reading its rows.
#[derive(Debug, thiserror::Error)]
pub enum SqliteError {
    /// Database error reported by sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A column holds a value whose storage class is not understood.
    #[error("Unsupported value type '{type_name}' in column '{column}'")]
    UnsupportedType {
        /// Column name.
        column: String,
        /// SQLite type name.
        type_name: String,
    },
}

/// Result type for SQLite driver operations.
pub type Result<T> = std::result::Result<T, SqliteError>;

impl From<SqliteError> for SqlError {
    fn from(err: SqliteError) -> Self {
        match err {
            SqliteError::Database(err) => Self::driver(err),
            SqliteError::UnsupportedType { column, type_name } => {
                DecodeError::UnsupportedValue { column, type_name }.into()
            }
        }
    }
}
