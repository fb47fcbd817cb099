//! `INSERT` statement.

use super::{BoxedExpression, SqlExpression, SqlList};
use crate::serializer::SqlSerializer;

/// `INSERT INTO <table> (<columns>) VALUES (<row>), ... [RETURNING <returning>]`.
///
/// `RETURNING` is only written when the dialect supports it.
pub struct SqlInsert {
    /// Target table.
    pub table: BoxedExpression,
    /// Column names.
    pub columns: Vec<BoxedExpression>,
    /// One entry per row; each row lists its values in column order.
    pub values: Vec<Vec<BoxedExpression>>,
    /// Columns to return.
    pub returning: Vec<BoxedExpression>,
}

impl SqlInsert {
    /// Creates an `INSERT` with no columns or rows.
    pub fn new(table: impl SqlExpression + 'static) -> Self {
        Self {
            table: Box::new(table),
            columns: Vec::new(),
            values: Vec::new(),
            returning: Vec::new(),
        }
    }
}

impl SqlExpression for SqlInsert {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("INSERT INTO ");
        self.table.serialize(serializer);
        if !self.columns.is_empty() {
            serializer.write(" (");
            SqlList::write_comma_separated(&self.columns, serializer);
            serializer.write(")");
        }
        if !self.values.is_empty() {
            serializer.write(" VALUES ");
            for (i, row) in self.values.iter().enumerate() {
                if i > 0 {
                    serializer.write(", ");
                }
                serializer.write("(");
                SqlList::write_comma_separated(row, serializer);
                serializer.write(")");
            }
        }
        if !self.returning.is_empty() && serializer.dialect().supports_returning() {
            serializer.write(" RETURNING ");
            SqlList::write_comma_separated(&self.returning, serializer);
        }
    }
}
