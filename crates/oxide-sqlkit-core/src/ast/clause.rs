//! Clause nodes used inside statements: joins, orderings and locking.

use super::{BoxedExpression, SqlExpression};
use crate::serializer::SqlSerializer;

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlJoinMethod {
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl SqlJoinMethod {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// A complete join clause: `<method> <table> [ON <condition>]`.
pub struct SqlJoin {
    /// The type of join.
    pub method: SqlJoinMethod,
    /// The joined table.
    pub table: BoxedExpression,
    /// The join condition; `None` for CROSS joins.
    pub condition: Option<BoxedExpression>,
}

impl SqlJoin {
    /// Creates a join with an `ON` condition.
    pub fn new(
        method: SqlJoinMethod,
        table: impl SqlExpression + 'static,
        condition: impl SqlExpression + 'static,
    ) -> Self {
        Self {
            method,
            table: Box::new(table),
            condition: Some(Box::new(condition)),
        }
    }

    /// Creates a CROSS JOIN.
    pub fn cross(table: impl SqlExpression + 'static) -> Self {
        Self {
            method: SqlJoinMethod::Cross,
            table: Box::new(table),
            condition: None,
        }
    }
}

impl SqlExpression for SqlJoin {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write(self.method.as_str());
        serializer.write(" ");
        self.table.serialize(serializer);
        if let Some(condition) = &self.condition {
            serializer.write(" ON ");
            condition.serialize(serializer);
        }
    }
}

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDirection {
    /// Ascending order (default).
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

impl SqlDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// An ORDER BY entry: `<expr> ASC|DESC`.
pub struct SqlOrderBy {
    /// The expression to order by.
    pub expr: BoxedExpression,
    /// The direction.
    pub direction: SqlDirection,
}

impl SqlOrderBy {
    /// Creates an ordering.
    pub fn new(expr: impl SqlExpression + 'static, direction: SqlDirection) -> Self {
        Self {
            expr: Box::new(expr),
            direction,
        }
    }
}

impl SqlExpression for SqlOrderBy {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        self.expr.serialize(serializer);
        serializer.write(" ");
        serializer.write(self.direction.as_str());
    }
}

/// Row locking appended to a SELECT.
///
/// The text comes from the dialect; a dialect without locking makes this
/// node write nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlLockingClause {
    /// Exclusive lock, `FOR UPDATE`.
    Update,
    /// Shared lock, `FOR SHARE` or the dialect's equivalent.
    Share,
}

impl SqlExpression for SqlLockingClause {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        if let Some(text) = serializer.dialect().locking_clause(*self) {
            serializer.write(text);
        }
    }
}
