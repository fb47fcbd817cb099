//! Error types.

use thiserror::Error;

/// A row could not be converted into the requested shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The row has no column with this name.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// The column holds a value of another shape.
    #[error("column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Expected shape.
        expected: &'static str,
        /// Shape actually stored in the row.
        found: &'static str,
    },

    /// The driver returned a value it cannot represent.
    #[error("column '{column}': unsupported value type '{type_name}'")]
    UnsupportedValue {
        /// Column name.
        column: String,
        /// Type name reported by the driver.
        type_name: String,
    },

    /// Deserializing the whole row into a model failed.
    #[error("cannot decode row: {0}")]
    Model(#[from] serde_json::Error),
}

/// Errors surfaced by query execution.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A row failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The driver failed. Passed through untouched.
    #[error("driver error: {0}")]
    Driver(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SqlError {
    /// Wraps a driver error.
    pub fn driver(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Driver(Box::new(err))
    }
}

/// Result type alias for query execution.
pub type Result<T> = std::result::Result<T, SqlError>;
