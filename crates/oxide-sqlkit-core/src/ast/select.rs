//! `SELECT` statement.

use super::{BoxedExpression, SqlExpression, SqlList, SqlRaw};
use crate::serializer::SqlSerializer;

/// A `SELECT` statement.
///
/// Clauses are always written in SQL grammar order, whatever order the
/// fields were filled in:
///
/// ```text
/// SELECT [DISTINCT] <columns>
///   [FROM <tables>] [<joins>] [WHERE <predicate>]
///   [GROUP BY <group_by>] [HAVING <having>] [ORDER BY <order_by>]
///   [LIMIT <limit>] [OFFSET <offset>] [<locking_clause>]
/// ```
///
/// Empty collections and unset options leave no trace in the output. The
/// structure is not validated: an empty `columns` yields `SELECT ` followed
/// by whatever clauses are set.
///
/// See [`SqlSelectBuilder`](crate::builder::SqlSelectBuilder) for building
/// this query.
#[derive(Default)]
pub struct SqlSelect {
    /// The projection.
    pub columns: Vec<BoxedExpression>,
    /// FROM targets.
    pub tables: Vec<BoxedExpression>,
    /// Whether to select DISTINCT rows.
    pub is_distinct: bool,
    /// Join clauses; each carries its own keyword.
    pub joins: Vec<BoxedExpression>,
    /// The WHERE clause.
    pub predicate: Option<BoxedExpression>,
    /// Zero or more `GROUP BY` expressions.
    pub group_by: Vec<BoxedExpression>,
    /// The HAVING clause.
    pub having: Option<BoxedExpression>,
    /// Zero or more `ORDER BY` expressions.
    pub order_by: Vec<BoxedExpression>,
    /// If set, limits the maximum number of results.
    pub limit: Option<u64>,
    /// If set, offsets the results.
    pub offset: Option<u64>,
    /// Locking expression, e.g. `FOR UPDATE`. See
    /// [`SqlLockingClause`](super::SqlLockingClause).
    pub locking_clause: Option<BoxedExpression>,
}

impl SqlSelect {
    /// Creates an empty `SELECT`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SqlExpression for SqlSelect {
    fn serialize(&self, serializer: &mut SqlSerializer<'_>) {
        serializer.write("SELECT ");
        if self.is_distinct {
            serializer.write("DISTINCT ");
        }
        SqlList::write_comma_separated(&self.columns, serializer);
        if !self.tables.is_empty() {
            serializer.write(" FROM ");
            SqlList::write_comma_separated(&self.tables, serializer);
        }
        if !self.joins.is_empty() {
            serializer.write(" ");
            SqlList::write_items(&self.joins, &SqlRaw::new(" "), serializer);
        }
        if let Some(predicate) = &self.predicate {
            serializer.write(" WHERE ");
            predicate.serialize(serializer);
        }
        if !self.group_by.is_empty() {
            serializer.write(" GROUP BY ");
            SqlList::write_comma_separated(&self.group_by, serializer);
        }
        if let Some(having) = &self.having {
            serializer.write(" HAVING ");
            having.serialize(serializer);
        }
        if !self.order_by.is_empty() {
            serializer.write(" ORDER BY ");
            SqlList::write_comma_separated(&self.order_by, serializer);
        }
        if let Some(limit) = self.limit {
            serializer.write(" LIMIT ");
            serializer.write(&limit.to_string());
        }
        if let Some(offset) = self.offset {
            serializer.write(" OFFSET ");
            serializer.write(&offset.to_string());
        }
        if let Some(locking_clause) = &self.locking_clause {
            serializer.write_spaced(locking_clause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        boxed, SqlBinaryExpression, SqlBinaryOperator, SqlBind, SqlColumn, SqlDirection,
        SqlIdentifier, SqlJoin, SqlJoinMethod, SqlLockingClause, SqlOrderBy,
    };
    use crate::dialect::{GenericDialect, PostgresDialect};
    use crate::serializer::serialize;
    use crate::value::SqlValue;

    fn raw(sql: &str) -> BoxedExpression {
        boxed(SqlRaw::new(sql))
    }

    #[test]
    fn test_bare_select() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("id"), raw("name")];
        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(query.sql, "SELECT id, name");
        assert!(query.binds.is_empty());
    }

    #[test]
    fn test_empty_projection_is_passed_through() {
        let mut select = SqlSelect::new();
        select.tables = vec![raw("users")];
        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(query.sql, "SELECT  FROM users");
    }

    #[test]
    fn test_where_and_limit() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("id"), raw("name")];
        select.tables = vec![raw("users")];
        select.predicate = Some(boxed(SqlBinaryExpression::new(
            SqlRaw::new("age"),
            SqlBinaryOperator::GreaterThan,
            SqlBind::new(18_i64),
        )));
        select.limit = Some(10);

        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(query.sql, "SELECT id, name FROM users WHERE age > ? LIMIT 10");
        assert_eq!(query.binds, vec![SqlValue::Int(18)]);
    }

    #[test]
    fn test_distinct() {
        let mut select = SqlSelect::new();
        select.is_distinct = true;
        select.columns = vec![raw("email")];
        select.tables = vec![raw("users")];
        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(query.sql, "SELECT DISTINCT email FROM users");
    }

    #[test]
    fn test_order_by_is_last_when_nothing_follows() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("id")];
        select.tables = vec![raw("users")];
        select.order_by = vec![
            boxed(SqlOrderBy::new(SqlRaw::new("name"), SqlDirection::Ascending)),
            boxed(SqlOrderBy::new(SqlRaw::new("id"), SqlDirection::Descending)),
        ];
        let query = serialize(&select, &GenericDialect::new());
        assert!(query.sql.ends_with("ORDER BY name ASC, id DESC"));
        assert!(!query.sql.contains("LIMIT"));
        assert!(!query.sql.contains("OFFSET"));
        assert!(!query.sql.contains("FOR"));
    }

    #[test]
    fn test_joins_are_space_separated() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("*")];
        select.tables = vec![boxed(SqlIdentifier::new("users"))];
        select.joins = vec![
            boxed(SqlJoin::new(
                SqlJoinMethod::Inner,
                SqlIdentifier::new("orders"),
                SqlRaw::new("users.id = orders.user_id"),
            )),
            boxed(SqlJoin::cross(SqlIdentifier::new("regions"))),
        ];
        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(
            query.sql,
            "SELECT * FROM \"users\" INNER JOIN \"orders\" ON users.id = orders.user_id CROSS JOIN \"regions\""
        );
    }

    #[test]
    fn test_all_clauses_in_grammar_order() {
        // Filled in reverse order on purpose.
        let mut select = SqlSelect::new();
        select.locking_clause = Some(boxed(SqlLockingClause::Update));
        select.offset = Some(20);
        select.limit = Some(10);
        select.order_by = vec![raw("total")];
        select.having = Some(boxed(SqlBinaryExpression::new(
            SqlRaw::new("COUNT(*)"),
            SqlBinaryOperator::GreaterThan,
            SqlBind::new(5_i64),
        )));
        select.group_by = vec![raw("status")];
        select.predicate = Some(boxed(SqlBinaryExpression::new(
            SqlColumn::new("active"),
            SqlBinaryOperator::Equal,
            SqlBind::new(true),
        )));
        select.joins = vec![raw("LEFT JOIN items ON items.order_id = orders.id")];
        select.tables = vec![raw("orders")];
        select.is_distinct = true;
        select.columns = vec![raw("status"), raw("COUNT(*)")];

        let query = serialize(&select, &PostgresDialect::new());
        assert_eq!(
            query.sql,
            "SELECT DISTINCT status, COUNT(*) FROM orders \
             LEFT JOIN items ON items.order_id = orders.id \
             WHERE \"active\" = $1 GROUP BY status HAVING COUNT(*) > $2 \
             ORDER BY total LIMIT 10 OFFSET 20 FOR UPDATE"
        );
        assert_eq!(query.binds, vec![SqlValue::Bool(true), SqlValue::Int(5)]);
    }

    #[test]
    fn test_offset_without_limit() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("id")];
        select.tables = vec![raw("users")];
        select.offset = Some(5);
        let query = serialize(&select, &GenericDialect::new());
        assert_eq!(query.sql, "SELECT id FROM users OFFSET 5");
    }

    #[test]
    fn test_serializing_twice_is_identical() {
        let mut select = SqlSelect::new();
        select.columns = vec![raw("id")];
        select.tables = vec![raw("users")];
        select.predicate = Some(boxed(SqlBinaryExpression::new(
            SqlRaw::new("name"),
            SqlBinaryOperator::Equal,
            SqlBind::new("alice"),
        )));

        let dialect = PostgresDialect::new();
        assert_eq!(serialize(&select, &dialect), serialize(&select, &dialect));
    }
}
