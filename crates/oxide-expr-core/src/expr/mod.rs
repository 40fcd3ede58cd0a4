//! Expression tree types.
//!
//! Every node is immutable and shared through `Arc`. Node identity is the
//! identity of that allocation: two handles are the *same* node when they
//! point at the same `Arc`, regardless of whether their contents compare
//! equal. Rewrites rely on this to hand back the original node when nothing
//! below it changed.

mod dml;
mod extension;
mod query;
mod scalar;

use std::sync::Arc;

pub use dml::{ColumnAssignmentExpr, DeleteExpr, InsertExpr, InsertFromQueryExpr, UpdateExpr};
pub use extension::{AsAny, ExtensionExpr, ExtensionNode};
pub use query::{
    JoinExpr, JoinType, OrderByExpr, OrderType, QueryExpr, QuerySource, SelectExpr, SubqueryExpr,
    TableExpr, UnionExpr,
};
pub use scalar::{
    AggregateExpr, AggregateType, ArgumentExpr, BetweenExpr, BinaryExpr, BinaryOperator,
    CastingExpr, ColumnDeclaringExpr, ColumnExpr, ExistsExpr, FunctionExpr, InListExpr,
    InListItems, ScalarExpr, UnaryExpr, UnaryOperator,
};

/// Node identity comparison.
pub trait SameNode {
    /// Returns `true` if `self` and `other` are the same node allocation.
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameNode for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: SameNode> SameNode for Option<T> {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: SameNode> SameNode for [T] {
    fn is_same(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.is_same(b))
    }
}

/// The root of an expression tree: a statement, query, scalar or source.
#[derive(Debug, Clone)]
pub enum SqlExpr {
    /// SELECT or UNION.
    Query(QueryExpr),
    /// INSERT ... VALUES.
    Insert(Arc<InsertExpr>),
    /// INSERT ... SELECT.
    InsertFromQuery(Arc<InsertFromQueryExpr>),
    /// UPDATE.
    Update(Arc<UpdateExpr>),
    /// DELETE.
    Delete(Arc<DeleteExpr>),
    /// A standalone scalar expression.
    Scalar(ScalarExpr),
    /// A standalone row source.
    Source(QuerySource),
    /// Dialect-defined statement, such as an upsert.
    Extension(ExtensionExpr),
}

impl SqlExpr {
    /// Short name of the node kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Query(q) => q.kind(),
            Self::Insert(_) => "insert",
            Self::InsertFromQuery(_) => "insert_from_query",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
            Self::Scalar(s) => s.kind(),
            Self::Source(s) => s.kind(),
            Self::Extension(e) => e.kind(),
        }
    }
}

impl SameNode for SqlExpr {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Query(a), Self::Query(b)) => a.is_same(b),
            (Self::Insert(a), Self::Insert(b)) => Arc::ptr_eq(a, b),
            (Self::InsertFromQuery(a), Self::InsertFromQuery(b)) => Arc::ptr_eq(a, b),
            (Self::Update(a), Self::Update(b)) => Arc::ptr_eq(a, b),
            (Self::Delete(a), Self::Delete(b)) => Arc::ptr_eq(a, b),
            (Self::Scalar(a), Self::Scalar(b)) => a.is_same(b),
            (Self::Source(a), Self::Source(b)) => a.is_same(b),
            (Self::Extension(a), Self::Extension(b)) => a.is_same(b),
            _ => false,
        }
    }
}

impl From<QueryExpr> for SqlExpr {
    fn from(query: QueryExpr) -> Self {
        Self::Query(query)
    }
}

impl From<ScalarExpr> for SqlExpr {
    fn from(expr: ScalarExpr) -> Self {
        Self::Scalar(expr)
    }
}

impl From<QuerySource> for SqlExpr {
    fn from(source: QuerySource) -> Self {
        Self::Source(source)
    }
}

impl From<ExtensionExpr> for SqlExpr {
    fn from(expr: ExtensionExpr) -> Self {
        Self::Extension(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlType;

    #[test]
    fn test_list_identity() {
        let a = ScalarExpr::column("a", SqlType::Int);
        let b = ScalarExpr::column("b", SqlType::Int);
        let list = vec![a.clone(), b.clone()];
        let same = vec![a.clone(), b];
        let fresh = vec![a, ScalarExpr::column("b", SqlType::Int)];

        assert!(list.is_same(&same));
        assert!(!list.is_same(&fresh));
        assert!(!list.is_same(&list[..1]));
    }

    #[test]
    fn test_root_kind() {
        let select = SelectExpr::new(QuerySource::table("t")).into_expr();
        assert_eq!(select.kind(), "select");
        assert!(select.is_same(&select.clone()));

        let delete = DeleteExpr::new(TableExpr::new("t"), None).into_expr();
        assert_eq!(delete.kind(), "delete");
        assert!(!select.is_same(&delete));
    }
}
