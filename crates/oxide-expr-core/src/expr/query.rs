//! Query and row-source nodes.

use std::sync::Arc;

use super::extension::ExtensionExpr;
use super::scalar::ScalarExpr;
use super::{SameNode, SqlExpr};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderType {
    /// Ascending order (default).
    #[default]
    Ascending,
    /// Descending order.
    Descending,
}

/// An ORDER BY entry.
#[derive(Debug, Clone)]
pub struct OrderByExpr {
    /// The expression to order by.
    pub expr: ScalarExpr,
    /// The direction.
    pub order: OrderType,
}

impl OrderByExpr {
    /// Ascending order on `expr`.
    #[must_use]
    pub fn asc(expr: ScalarExpr) -> Arc<Self> {
        Arc::new(Self {
            expr,
            order: OrderType::Ascending,
        })
    }

    /// Descending order on `expr`.
    #[must_use]
    pub fn desc(expr: ScalarExpr) -> Arc<Self> {
        Arc::new(Self {
            expr,
            order: OrderType::Descending,
        })
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// CROSS JOIN.
    Cross,
    /// INNER JOIN.
    Inner,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
    /// FULL JOIN.
    Full,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cross => "CROSS JOIN",
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
        }
    }
}

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExpr {
    /// Table name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
    /// Catalog name.
    pub catalog: Option<String>,
    /// Schema name.
    pub schema: Option<String>,
}

impl TableExpr {
    /// Creates a table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            catalog: None,
            schema: None,
        }
    }

    /// Adds an alias.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds a schema qualifier.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Adds a catalog qualifier.
    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }
}

/// Two row sources combined with a join.
#[derive(Debug, Clone)]
pub struct JoinExpr {
    /// The type of join.
    pub join_type: JoinType,
    /// Left side.
    pub left: QuerySource,
    /// Right side.
    pub right: QuerySource,
    /// ON condition.
    pub condition: Option<ScalarExpr>,
}

/// A sub-query used as a row source.
#[derive(Debug, Clone)]
pub struct SubqueryExpr {
    /// The query.
    pub query: QueryExpr,
    /// Alias.
    pub alias: Option<String>,
}

/// A source of rows in a FROM clause.
#[derive(Debug, Clone)]
pub enum QuerySource {
    /// A table.
    Table(Arc<TableExpr>),
    /// A join.
    Join(Arc<JoinExpr>),
    /// A parenthesized sub-query.
    Subquery(Arc<SubqueryExpr>),
    /// Dialect-defined source, such as a natural join.
    Extension(ExtensionExpr),
}

impl QuerySource {
    /// Creates a source for table `name`.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(Arc::new(TableExpr::new(name)))
    }

    /// Creates a sub-query source.
    #[must_use]
    pub fn subquery(query: QueryExpr, alias: Option<String>) -> Self {
        Self::Subquery(Arc::new(SubqueryExpr { query, alias }))
    }

    /// Joins `right` onto `self`.
    #[must_use]
    pub fn join(self, join_type: JoinType, right: Self, condition: Option<ScalarExpr>) -> Self {
        Self::Join(Arc::new(JoinExpr {
            join_type,
            left: self,
            right,
            condition,
        }))
    }

    /// `self CROSS JOIN right`.
    #[must_use]
    pub fn cross_join(self, right: Self) -> Self {
        self.join(JoinType::Cross, right, None)
    }

    /// `self INNER JOIN right ON condition`.
    #[must_use]
    pub fn inner_join(self, right: Self, condition: ScalarExpr) -> Self {
        self.join(JoinType::Inner, right, Some(condition))
    }

    /// `self LEFT JOIN right ON condition`.
    #[must_use]
    pub fn left_join(self, right: Self, condition: ScalarExpr) -> Self {
        self.join(JoinType::Left, right, Some(condition))
    }

    /// `self RIGHT JOIN right ON condition`.
    #[must_use]
    pub fn right_join(self, right: Self, condition: ScalarExpr) -> Self {
        self.join(JoinType::Right, right, Some(condition))
    }

    /// Short name of the node kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Table(_) => "table",
            Self::Join(_) => "join",
            Self::Subquery(_) => "subquery",
            Self::Extension(e) => e.kind(),
        }
    }
}

impl SameNode for QuerySource {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Table(a), Self::Table(b)) => Arc::ptr_eq(a, b),
            (Self::Join(a), Self::Join(b)) => Arc::ptr_eq(a, b),
            (Self::Subquery(a), Self::Subquery(b)) => Arc::ptr_eq(a, b),
            (Self::Extension(a), Self::Extension(b)) => a.is_same(b),
            _ => false,
        }
    }
}

impl From<TableExpr> for QuerySource {
    fn from(table: TableExpr) -> Self {
        Self::Table(Arc::new(table))
    }
}

impl From<ExtensionExpr> for QuerySource {
    fn from(expr: ExtensionExpr) -> Self {
        Self::Extension(expr)
    }
}

/// A SELECT query.
#[derive(Debug, Clone)]
pub struct SelectExpr {
    /// Select list; empty means `*`.
    pub columns: Vec<ScalarExpr>,
    /// The FROM source.
    pub from: QuerySource,
    /// WHERE condition.
    pub where_clause: Option<ScalarExpr>,
    /// GROUP BY expressions.
    pub group_by: Vec<ScalarExpr>,
    /// HAVING condition.
    pub having: Option<ScalarExpr>,
    /// Whether to select DISTINCT rows.
    pub distinct: bool,
    /// ORDER BY entries.
    pub order_by: Vec<Arc<OrderByExpr>>,
    /// Rows to skip.
    pub offset: Option<i64>,
    /// Maximum rows to return.
    pub limit: Option<i64>,
}

impl SelectExpr {
    /// Creates `SELECT * FROM from`.
    #[must_use]
    pub const fn new(from: QuerySource) -> Self {
        Self {
            columns: Vec::new(),
            from,
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            distinct: false,
            order_by: Vec::new(),
            offset: None,
            limit: None,
        }
    }

    /// Sets the select list.
    #[must_use]
    pub fn columns(mut self, columns: Vec<ScalarExpr>) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, condition: ScalarExpr) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Sets the GROUP BY expressions.
    #[must_use]
    pub fn group_by(mut self, exprs: Vec<ScalarExpr>) -> Self {
        self.group_by = exprs;
        self
    }

    /// Sets the HAVING condition.
    #[must_use]
    pub fn having(mut self, condition: ScalarExpr) -> Self {
        self.having = Some(condition);
        self
    }

    /// Selects DISTINCT rows.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Sets the ORDER BY entries.
    #[must_use]
    pub fn order_by(mut self, order_by: Vec<Arc<OrderByExpr>>) -> Self {
        self.order_by = order_by;
        self
    }

    /// Sets the number of rows to skip.
    #[must_use]
    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the maximum number of rows.
    #[must_use]
    pub const fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Finishes construction as a query node.
    #[must_use]
    pub fn into_query(self) -> QueryExpr {
        QueryExpr::Select(Arc::new(self))
    }

    /// Finishes construction as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Query(self.into_query())
    }
}

/// `left UNION [ALL] right`.
#[derive(Debug, Clone)]
pub struct UnionExpr {
    /// Left query.
    pub left: QueryExpr,
    /// Right query.
    pub right: QueryExpr,
    /// Whether duplicates are kept.
    pub is_union_all: bool,
    /// ORDER BY entries applied to the combined result.
    pub order_by: Vec<Arc<OrderByExpr>>,
    /// Rows to skip.
    pub offset: Option<i64>,
    /// Maximum rows to return.
    pub limit: Option<i64>,
}

/// A query: something that yields rows and may be paginated.
#[derive(Debug, Clone)]
pub enum QueryExpr {
    /// SELECT query.
    Select(Arc<SelectExpr>),
    /// UNION of two queries.
    Union(Arc<UnionExpr>),
}

impl QueryExpr {
    /// Creates `left UNION right` (or `UNION ALL`).
    #[must_use]
    pub fn union(left: Self, right: Self, is_union_all: bool) -> Self {
        Self::Union(Arc::new(UnionExpr {
            left,
            right,
            is_union_all,
            order_by: Vec::new(),
            offset: None,
            limit: None,
        }))
    }

    /// Rows to skip, if set.
    #[must_use]
    pub fn offset(&self) -> Option<i64> {
        match self {
            Self::Select(e) => e.offset,
            Self::Union(e) => e.offset,
        }
    }

    /// Maximum rows to return, if set.
    #[must_use]
    pub fn limit(&self) -> Option<i64> {
        match self {
            Self::Select(e) => e.limit,
            Self::Union(e) => e.limit,
        }
    }

    /// Returns `true` if either offset or limit is set.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.offset().is_some() || self.limit().is_some()
    }

    /// Short name of the node kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Union(_) => "union",
        }
    }
}

impl SameNode for QueryExpr {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Select(a), Self::Select(b)) => Arc::ptr_eq(a, b),
            (Self::Union(a), Self::Union(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}
