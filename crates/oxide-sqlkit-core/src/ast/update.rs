//! `UPDATE` statement.

use super::{BoxedExpression, SqlExpression, SqlList};
use crate::serializer::SqlSerializer;

/// `UPDATE <table> SET <values> [WHERE <predicate>] [RETURNING <returning>]`.
pub struct SqlUpdate {
    /// Target table.
    pub table: BoxedExpression,
    /// Assignments, typically `column = value` binary expressions.
    pub values: Vec<BoxedExpression>,
    /// The WHERE clause.
    pub predicate: Option<BoxedExpression>,
    /// Columns to return; written only if the dialect supports it.
    pub returning: Vec<BoxedExpression>,
}

impl SqlUpdate {
    /// Creates an `UPDATE` with no assignments.
    pub fn new(table: impl SqlExpression + 'static) -> Self {
        Self {
            table: Box::new(table),
            values: Vec::new(),
            predicate: None,
            returning: Vec::new(),
        }
    }
}

impl SqlExpression for SqlUpdate {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("UPDATE ");
        self.table.serialize(serializer);
        serializer.write(" SET ");
        SqlList::write_comma_separated(&self.values, serializer);
        if let Some(predicate) = &self.predicate {
            serializer.write(" WHERE ");
            predicate.serialize(serializer);
        }
        if !self.returning.is_empty() && serializer.dialect().supports_returning() {
            serializer.write(" RETURNING ");
            SqlList::write_comma_separated(&self.returning, serializer);
        }
    }
}
