//! Identifiers, columns and aliases.

use super::{BoxedExpression, SqlExpression};
use crate::serializer::SqlSerializer;

/// An identifier quoted for the dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlIdentifier(pub String);

impl SqlIdentifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl SqlExpression for SqlIdentifier {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write_identifier(&self.0);
    }
}

/// A column reference, optionally qualified by its table.
///
/// The name `*` is written unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    /// Optional table qualifier.
    pub table: Option<SqlIdentifier>,
    /// Column name.
    pub name: String,
}

impl SqlColumn {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(SqlIdentifier::new(table)),
            name: name.into(),
        }
    }
}

/// Splits `"table.column"` into a qualified reference; a name without a dot
/// stays unqualified.
impl From<&str> for SqlColumn {
    fn from(path: &str) -> Self {
        match path.split_once('.') {
            Some((table, name)) => Self::qualified(table, name),
            None => Self::new(path),
        }
    }
}

impl SqlExpression for SqlColumn {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        if let Some(table) = &self.table {
            table.serialize(serializer);
            serializer.write(".");
        }
        if self.name == "*" {
            serializer.write("*");
        } else {
            serializer.write_identifier(&self.name);
        }
    }
}

/// `<expr> AS <alias>`.
pub struct SqlAlias {
    /// The aliased expression.
    pub expr: BoxedExpression,
    /// The alias.
    pub alias: SqlIdentifier,
}

impl SqlAlias {
    /// Creates an alias.
    pub fn new(expr: impl SqlExpression + 'static, alias: impl Into<String>) -> Self {
        Self {
            expr: Box::new(expr),
            alias: SqlIdentifier::new(alias),
        }
    }
}

impl SqlExpression for SqlAlias {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        self.expr.serialize(serializer);
        serializer.write(" AS ");
        self.alias.serialize(serializer);
    }
}
