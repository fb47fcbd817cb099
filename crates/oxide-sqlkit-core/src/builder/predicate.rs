//! WHERE-clause chaining shared by SELECT, UPDATE and DELETE builders.

use crate::ast::{
    boxed, BoxedExpression, SqlBinaryExpression, SqlBinaryOperator, SqlBind, SqlColumn,
    SqlExpression,
};
use crate::value::ToSqlValue;

/// Builds up a WHERE predicate one condition at a time.
///
/// Conditions are combined left to right with `AND` / `OR`, without adding
/// parentheses. Group conditions with [`SqlGroup`](crate::ast::SqlGroup)
/// when precedence matters.
pub trait SqlPredicateBuilder: Sized {
    /// The predicate being built.
    fn predicate_mut(&mut self) -> &mut Option<BoxedExpression>;

    /// Adds a condition, combined with `AND`.
    #[must_use]
    fn where_expr(mut self, expr: impl SqlExpression + 'static) -> Self {
        combine(self.predicate_mut(), SqlBinaryOperator::And, boxed(expr));
        self
    }

    /// Adds a condition, combined with `OR`.
    #[must_use]
    fn or_where_expr(mut self, expr: impl SqlExpression + 'static) -> Self {
        combine(self.predicate_mut(), SqlBinaryOperator::Or, boxed(expr));
        self
    }

    /// Adds `column <op> value`, combined with `AND`. The value is bound.
    #[must_use]
    fn where_column(self, column: &str, op: SqlBinaryOperator, value: impl ToSqlValue) -> Self {
        self.where_expr(column_condition(column, op, value))
    }

    /// Adds `column <op> value`, combined with `OR`. The value is bound.
    #[must_use]
    fn or_where_column(
        self,
        column: &str,
        op: SqlBinaryOperator,
        value: impl ToSqlValue,
    ) -> Self {
        self.or_where_expr(column_condition(column, op, value))
    }
}

fn column_condition(
    column: &str,
    op: SqlBinaryOperator,
    value: impl ToSqlValue,
) -> SqlBinaryExpression {
    SqlBinaryExpression::new(SqlColumn::from(column), op, SqlBind::new(value))
}

fn combine(predicate: &mut Option<BoxedExpression>, op: SqlBinaryOperator, expr: BoxedExpression) {
    let combined = match predicate.take() {
        Some(existing) => boxed(SqlBinaryExpression::new(existing, op, expr)),
        None => expr,
    };
    *predicate = Some(combined);
}
