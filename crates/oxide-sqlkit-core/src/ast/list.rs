//! Lists and parenthesized groups.

use super::{BoxedExpression, SqlExpression, SqlRaw};
use crate::serializer::SqlSerializer;

/// Expressions joined by a separator, `", "` unless set otherwise.
///
/// No separator is written before the first or after the last item, and an
/// empty list writes nothing.
pub struct SqlList {
    /// The items, in output order.
    pub items: Vec<BoxedExpression>,
    /// Written between consecutive items.
    pub separator: BoxedExpression,
}

impl SqlList {
    /// Creates a comma-separated list.
    #[must_use]
    pub fn new(items: Vec<BoxedExpression>) -> Self {
        Self::with_separator(items, SqlRaw::new(", "))
    }

    /// Creates a list with a custom separator.
    #[must_use]
    pub fn with_separator(
        items: Vec<BoxedExpression>,
        separator: impl SqlExpression + 'static,
    ) -> Self {
        Self {
            items,
            separator: Box::new(separator),
        }
    }

    /// Writes `items` joined by `separator` without building a list node.
    ///
    /// Statement nodes use this to serialize the collections they own.
    pub fn write_items<E: SqlExpression>(
        items: &[E],
        separator: &dyn SqlExpression,
        serializer: &mut SqlSerializer<'_>,
    ) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                separator.serialize(serializer);
            }
            item.serialize(serializer);
        }
    }

    /// Writes `items` comma-separated.
    pub fn write_comma_separated<E: SqlExpression>(
        items: &[E],
        serializer: &mut SqlSerializer<'_>,
    ) {
        Self::write_items(items, &SqlRaw::new(", "), serializer);
    }
}

impl SqlExpression for SqlList {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        Self::write_items(&self.items, &self.separator, serializer);
    }
}

/// `(<expr>)`.
pub struct SqlGroup(pub BoxedExpression);

impl SqlGroup {
    /// Wraps `expr` in parentheses.
    pub fn new(expr: impl SqlExpression + 'static) -> Self {
        Self(Box::new(expr))
    }
}

impl SqlExpression for SqlGroup {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("(");
        self.0.serialize(serializer);
        serializer.write(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{boxed, SqlBind};
    use crate::dialect::GenericDialect;
    use crate::serializer::serialize;

    fn raw_items(items: &[&str]) -> Vec<BoxedExpression> {
        items.iter().map(|s| boxed(SqlRaw::new(*s))).collect()
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let query = serialize(&SqlList::new(vec![]), &GenericDialect::new());
        assert_eq!(query.sql, "");
    }

    #[test]
    fn test_single_item_has_no_separator() {
        let query = serialize(&SqlList::new(raw_items(&["a"])), &GenericDialect::new());
        assert_eq!(query.sql, "a");
    }

    #[test]
    fn test_custom_separator() {
        let list = SqlList::with_separator(raw_items(&["a", "b", "c"]), SqlRaw::new(","));
        let query = serialize(&list, &GenericDialect::new());
        assert_eq!(query.sql, "a,b,c");
    }

    #[test]
    fn test_default_separator() {
        let query = serialize(
            &SqlList::new(raw_items(&["a", "b"])),
            &GenericDialect::new(),
        );
        assert_eq!(query.sql, "a, b");
    }

    #[test]
    fn test_separator_may_carry_binds() {
        let list = SqlList::with_separator(raw_items(&["a", "b", "c"]), SqlBind::new(0_i64));
        let query = serialize(&list, &GenericDialect::new());
        assert_eq!(query.sql, "a?b?c");
        assert_eq!(query.binds.len(), 2);
    }

    #[test]
    fn test_group() {
        let query = serialize(
            &SqlGroup::new(SqlList::new(raw_items(&["1", "2"]))),
            &GenericDialect::new(),
        );
        assert_eq!(query.sql, "(1, 2)");
    }
}
