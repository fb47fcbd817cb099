//! Result rows.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;
use crate::value::{FromSqlValue, SqlValue};

/// One result row as produced by a driver.
///
/// The execution path forwards rows without looking at them. The provided
/// methods decode columns or whole rows on demand.
pub trait SqlRow: Send {
    /// Column names, in result order.
    fn columns(&self) -> Vec<String>;

    /// The value of `column`, or `None` if the row has no such column.
    fn value(&self, column: &str) -> Option<SqlValue>;

    /// Returns whether the row has `column`.
    fn contains(&self, column: &str) -> bool {
        self.columns().iter().any(|c| c == column)
    }

    /// Returns whether `column` holds NULL.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingColumn`] if there is no such column.
    fn decode_nil(&self, column: &str) -> Result<bool, DecodeError> {
        self.value(column)
            .map(|value| value.is_null())
            .ok_or_else(|| DecodeError::MissingColumn(column.to_string()))
    }

    /// Decodes one column.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MissingColumn`] or
    /// [`DecodeError::TypeMismatch`].
    fn decode<T: FromSqlValue>(&self, column: &str) -> Result<T, DecodeError>
    where
        Self: Sized,
    {
        let value = self
            .value(column)
            .ok_or_else(|| DecodeError::MissingColumn(column.to_string()))?;
        T::decode_column(column, value)
    }

    /// Decodes the whole row into `D`, matching columns to fields by name.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Model`] if `D` cannot be built from the row.
    fn decode_model<D: DeserializeOwned>(&self) -> Result<D, DecodeError>
    where
        Self: Sized,
    {
        Ok(serde_json::from_value(serde_json::Value::Object(
            self.to_json_object(),
        ))?)
    }

    /// The row as a JSON object keyed by column name.
    fn to_json_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.columns()
            .into_iter()
            .map(|column| {
                let value = self
                    .value(&column)
                    .map_or(serde_json::Value::Null, |v| v.to_json());
                (column, value)
            })
            .collect()
    }
}
