//! `DELETE` statement.

use super::{BoxedExpression, SqlExpression, SqlList};
use crate::serializer::SqlSerializer;

/// `DELETE FROM <table> [WHERE <predicate>] [RETURNING <returning>]`.
///
/// A missing predicate deletes every row; nothing here guards against it.
pub struct SqlDelete {
    /// Target table.
    pub table: BoxedExpression,
    /// The WHERE clause.
    pub predicate: Option<BoxedExpression>,
    /// Columns to return; written only if the dialect supports it.
    pub returning: Vec<BoxedExpression>,
}

impl SqlDelete {
    /// Creates a `DELETE`.
    pub fn new(table: impl SqlExpression + 'static) -> Self {
        Self {
            table: Box::new(table),
            predicate: None,
            returning: Vec::new(),
        }
    }
}

impl SqlExpression for SqlDelete {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("DELETE FROM ");
        self.table.serialize(serializer);
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
