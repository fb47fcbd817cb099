//! The accumulator an expression tree is serialized into.

use crate::ast::SqlExpression;
use crate::dialect::SqlDialect;
use crate::value::SqlValue;

/// SQL text plus the bind values its placeholders refer to.
///
/// The Nth placeholder in `sql` corresponds to the Nth element of `binds`.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedQuery {
    /// The SQL with dialect-specific placeholders.
    pub sql: String,
    /// Bind values, in placeholder order.
    pub binds: Vec<SqlValue>,
}

/// Accumulates SQL text and bind values while a tree is traversed.
///
/// A serializer lives for exactly one top-level serialization; it is
/// consumed by [`SqlSerializer::finish`].
pub struct SqlSerializer<'d> {
    sql: String,
    binds: Vec<SqlValue>,
    dialect: &'d dyn SqlDialect,
}

impl<'d> SqlSerializer<'d> {
    /// Creates an empty serializer for `dialect`.
    #[must_use]
    pub fn new(dialect: &'d dyn SqlDialect) -> Self {
        Self {
            sql: String::new(),
            binds: Vec::new(),
            dialect,
        }
    }

    /// Returns the dialect this serializer renders for.
    #[must_use]
    pub fn dialect(&self) -> &'d dyn SqlDialect {
        self.dialect
    }

    /// Returns the number of binds written so far.
    #[must_use]
    pub fn bind_count(&self) -> usize {
        self.binds.len()
    }

    /// Returns the SQL written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Appends raw SQL. Only for keywords and punctuation; caller values go
    /// through [`write_bind`](Self::write_bind).
    pub fn write(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Records a bind value and writes its placeholder.
    pub fn write_bind(&mut self, value: SqlValue) {
        self.binds.push(value);
        let placeholder = self.dialect.bind_placeholder(self.binds.len());
        self.sql.push_str(&placeholder);
    }

    /// Writes an identifier quoted for the dialect.
    pub fn write_identifier(&mut self, name: &str) {
        let quoted = self.dialect.quote_identifier(name);
        self.sql.push_str(&quoted);
    }

    /// Writes a space followed by `expr`. If `expr` writes nothing, the space
    /// is taken back so no trailing separator is left.
    pub fn write_spaced(&mut self, expr: &dyn SqlExpression) {
        let mark = self.sql.len();
        self.sql.push(' ');
        expr.serialize(self);
        if self.sql.len() == mark + 1 {
            self.sql.truncate(mark);
        }
    }

    /// Consumes the serializer, returning the SQL and its binds.
    #[must_use]
    pub fn finish(self) -> SerializedQuery {
        SerializedQuery {
            sql: self.sql,
            binds: self.binds,
        }
    }
}

/// Serializes `expr` for `dialect` into a fresh serializer.
#[must_use]
pub fn serialize(expr: &dyn SqlExpression, dialect: &dyn SqlDialect) -> SerializedQuery {
    let mut serializer = SqlSerializer::new(dialect);
    expr.serialize(&mut serializer);
    serializer.finish()
}
