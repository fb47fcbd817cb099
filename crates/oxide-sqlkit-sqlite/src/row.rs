//! Rows read from SQLite.

use oxide_sqlkit_core::{SqlRow, SqlValue};
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error::{Result, SqliteError};

/// A fully read SQLite row.
///
/// Values are converted by storage class when the row arrives, so the row
/// owns plain [`SqlValue`]s and holds no statement resources.
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteRow {
    values: Vec<(String, SqlValue)>,
}

impl SqliteRow {
    /// Reads every column of `row`.
    ///
    /// Integers in a column declared `BOOLEAN` are read back as booleans.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::Database`] if sqlx cannot read a value and
    /// [`SqliteError::UnsupportedType`] for an unknown storage class.
    pub fn read(row: &sqlx::sqlite::SqliteRow) -> Result<Self> {
        let values = row
            .columns()
            .iter()
            .map(|column| {
                // Booleans are stored as integers; the declared type restores them.
                let value = match read_value(row, column.ordinal(), column.name())? {
                    SqlValue::Int(i) if column.type_info().name() == "BOOLEAN" => {
                        SqlValue::Bool(i != 0)
                    }
                    value => value,
                };
                Ok((column.name().to_string(), value))
            })
            .collect::<Result<_>>()?;
        Ok(Self { values })
    }
}

/// Reads one value by its storage class.
fn read_value(row: &sqlx::sqlite::SqliteRow, index: usize, column: &str) -> Result<SqlValue> {
    let type_name = {
        let raw = row.try_get_raw(index)?;
        if raw.is_null() {
            return Ok(SqlValue::Null);
        }
        raw.type_info().name().to_string()
    };
    let value = match type_name.as_str() {
        "INTEGER" => SqlValue::Int(row.try_get(index)?),
        "REAL" => SqlValue::Float(row.try_get(index)?),
        "TEXT" => SqlValue::Text(row.try_get(index)?),
        "BLOB" => SqlValue::Blob(row.try_get(index)?),
        _ => {
            return Err(SqliteError::UnsupportedType {
                column: column.to_string(),
                type_name,
            })
        }
    };
    Ok(value)
}

impl SqlRow for SqliteRow {
    fn columns(&self) -> Vec<String> {
        self.values.iter().map(|(column, _)| column.clone()).collect()
    }

    fn value(&self, column: &str) -> Option<SqlValue> {
        self.values
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, value)| value.clone())
    }
}
