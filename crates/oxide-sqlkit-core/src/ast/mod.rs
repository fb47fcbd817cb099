//! Abstract Syntax Tree (AST) nodes for SQL statements.
//!
//! Every node implements [`SqlExpression`]: it knows how to write itself,
//! and any values it carries, into a [`SqlSerializer`]. Parents own their
//! children, so a tree has no sharing and no cycles. Serialization only
//! reads the tree, so one tree can be serialized any number of times.

mod clause;
mod delete;
mod identifier;
mod insert;
mod list;
mod literal;
mod operator;
mod select;
mod update;

pub use clause::{SqlDirection, SqlJoin, SqlJoinMethod, SqlLockingClause, SqlOrderBy};
pub use delete::SqlDelete;
pub use identifier::{SqlAlias, SqlColumn, SqlIdentifier};
pub use insert::SqlInsert;
pub use list::{SqlGroup, SqlList};
pub use literal::{SqlBind, SqlBinds, SqlLiteral, SqlRaw};
pub use operator::{SqlBinaryExpression, SqlBinaryOperator, SqlFunction};
pub use select::SqlSelect;
pub use update::SqlUpdate;

use crate::serializer::SqlSerializer;

/// A node of the SQL tree.
pub trait SqlExpression: Send + Sync {
    /// Writes this node's SQL and binds, in final SQL order.
    fn serialize(&self, serializer: &mut SqlSerializer<'_>);
}

/// An owned, type-erased expression, as stored by parent nodes.
pub type BoxedExpression = Box<dyn SqlExpression>;

impl<T: SqlExpression + ?Sized> SqlExpression for Box<T> {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        (**self).serialize(serializer);
    }
}

impl<T: SqlExpression + ?Sized> SqlExpression for &T {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        (**self).serialize(serializer);
    }
}

/// Boxes an expression for storage in a parent node.
pub fn boxed(expr: impl SqlExpression + 'static) -> BoxedExpression {
    Box::new(expr)
}
