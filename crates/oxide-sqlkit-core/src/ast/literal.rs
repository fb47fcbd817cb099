//! Leaf nodes: raw text, literals and bind markers.

use super::SqlExpression;
use crate::serializer::SqlSerializer;
use crate::value::{SqlValue, ToSqlValue};

/// Raw SQL text, written verbatim.
///
/// **Warning**: Only use this for SQL fragments that don't contain user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRaw(pub String);

impl SqlRaw {
    /// Creates a raw fragment.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }
}

impl SqlExpression for SqlRaw {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write(&self.0);
    }
}

/// A literal written into the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    /// `*`
    All,
    /// The column default, as the dialect spells it.
    Default,
    /// `NULL`
    Null,
    /// A boolean, as the dialect spells it.
    Boolean(bool),
    /// A number, written as given.
    Numeric(String),
    /// A string, single-quoted with embedded quotes doubled.
    String(String),
}

impl SqlExpression for SqlLiteral {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        match self {
            Self::All => serializer.write("*"),
            Self::Default => {
                let default = serializer.dialect().literal_default();
                serializer.write(default);
            }
            Self::Null => serializer.write("NULL"),
            Self::Boolean(value) => {
                let literal = serializer.dialect().literal_boolean(*value);
                serializer.write(literal);
            }
            Self::Numeric(n) => serializer.write(n),
            Self::String(s) => {
                let escaped = s.replace('\'', "''");
                serializer.write(&format!("'{escaped}'"));
            }
        }
    }
}

/// A single bind value; writes a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlBind(pub SqlValue);

impl SqlBind {
    /// Creates a bind from anything convertible to a [`SqlValue`].
    #[must_use]
    pub fn new(value: impl ToSqlValue) -> Self {
        Self(value.to_sql_value())
    }
}

impl SqlExpression for SqlBind {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write_bind(self.0.clone());
    }
}

/// A parenthesized group of binds, e.g. `(?, ?, ?)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlBinds(pub Vec<SqlValue>);

impl SqlBinds {
    /// Creates a bind group.
    #[must_use]
    pub fn new<T: ToSqlValue>(values: impl IntoIterator<Item = T>) -> Self {
        Self(values.into_iter().map(ToSqlValue::to_sql_value).collect())
    }
}

impl SqlExpression for SqlBinds {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("(");
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                serializer.write(", ");
            }
            serializer.write_bind(value.clone());
        }
        serializer.write(")");
    }
}
