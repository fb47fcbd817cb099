//! Operators and function calls.

use super::{BoxedExpression, SqlExpression, SqlList, SqlLiteral};
use crate::serializer::SqlSerializer;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlBinaryOperator {
    // Comparison
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Pattern and membership
    Like,
    NotLike,
    In,
    NotIn,
    Is,
    IsNot,

    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Concatenate,
}

impl SqlBinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Concatenate => "||",
        }
    }
}

impl SqlExpression for SqlBinaryOperator {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write(self.as_str());
    }
}

/// `<left> <op> <right>`.
///
/// No parentheses are added; wrap operands in [`SqlGroup`](super::SqlGroup)
/// where precedence needs it.
pub struct SqlBinaryExpression {
    /// Left operand.
    pub left: BoxedExpression,
    /// Operator.
    pub op: SqlBinaryOperator,
    /// Right operand.
    pub right: BoxedExpression,
}

impl SqlBinaryExpression {
    /// Creates a binary expression.
    pub fn new(
        left: impl SqlExpression + 'static,
        op: SqlBinaryOperator,
        right: impl SqlExpression + 'static,
    ) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

impl SqlExpression for SqlBinaryExpression {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        self.left.serialize(serializer);
        serializer.write(" ");
        self.op.serialize(serializer);
        serializer.write(" ");
        self.right.serialize(serializer);
    }
}

/// A function call, `name(arg, ...)`.
pub struct SqlFunction {
    /// Function name, written verbatim.
    pub name: String,
    /// Arguments.
    pub args: Vec<BoxedExpression>,
}

impl SqlFunction {
    /// Creates a function call.
    #[must_use]
    pub fn new(name: impl Into<String>, args: Vec<BoxedExpression>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// `COUNT(*)`.
    #[must_use]
    pub fn count_all() -> Self {
        Self::new("COUNT", vec![Box::new(SqlLiteral::All)])
    }
}

impl SqlExpression for SqlFunction {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write(&self.name);
        serializer.write("(");
        SqlList::write_comma_separated(&self.args, serializer);
        serializer.write(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{boxed, SqlBind, SqlBinds, SqlColumn, SqlGroup};
    use crate::dialect::PostgresDialect;
    use crate::serializer::serialize;
    use crate::value::SqlValue;

    #[test]
    fn test_binary_expression() {
        let expr = SqlBinaryExpression::new(
            SqlColumn::new("age"),
            SqlBinaryOperator::GreaterThanOrEqual,
            SqlBind::new(21_i64),
        );
        let query = serialize(&expr, &PostgresDialect::new());
        assert_eq!(query.sql, "\"age\" >= $1");
        assert_eq!(query.binds, vec![SqlValue::Int(21)]);
    }

    #[test]
    fn test_in_list() {
        let expr = SqlBinaryExpression::new(
            SqlColumn::new("status"),
            SqlBinaryOperator::In,
            SqlBinds::new(["open", "closed"]),
        );
        let query = serialize(&expr, &PostgresDialect::new());
        assert_eq!(query.sql, "\"status\" IN ($1, $2)");
    }

    #[test]
    fn test_nested_groups_keep_bind_order() {
        let left = SqlGroup::new(SqlBinaryExpression::new(
            SqlColumn::new("a"),
            SqlBinaryOperator::Equal,
            SqlBind::new(1_i64),
        ));
        let right = SqlGroup::new(SqlBinaryExpression::new(
            SqlColumn::new("b"),
            SqlBinaryOperator::Equal,
            SqlBind::new(2_i64),
        ));
        let expr = SqlBinaryExpression::new(left, SqlBinaryOperator::Or, right);
        let query = serialize(&expr, &PostgresDialect::new());
        assert_eq!(query.sql, "(\"a\" = $1) OR (\"b\" = $2)");
        assert_eq!(query.binds, vec![SqlValue::Int(1), SqlValue::Int(2)]);
    }

    #[test]
    fn test_function() {
        let query = serialize(&SqlFunction::count_all(), &PostgresDialect::new());
        assert_eq!(query.sql, "COUNT(*)");

        let lower = SqlFunction::new("LOWER", vec![boxed(SqlColumn::new("email"))]);
        assert_eq!(
            serialize(&lower, &PostgresDialect::new()).sql,
            "LOWER(\"email\")"
        );
    }
}
