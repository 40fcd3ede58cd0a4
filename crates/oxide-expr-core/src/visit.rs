//! Identity-preserving tree rewriting.
//!
//! [`ExprVisitor`] has one method per node kind. Every method defaults to a
//! `walk_*` function that visits the node's children and rebuilds the node
//! only if some child came back as a different allocation; otherwise the
//! input `Arc` is returned as is. A visitor that changes nothing therefore
//! returns the exact original root.
//!
//! Override the methods for the node kinds you care about and call the
//! matching `walk_*` function to keep the default traversal for children:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oxide_expr_core::expr::{ColumnExpr, QuerySource, ScalarExpr, SelectExpr, SameNode};
//! use oxide_expr_core::types::SqlType;
//! use oxide_expr_core::visit::ExprVisitor;
//! use oxide_expr_core::Result;
//!
//! /// Qualifies every unqualified column with a table alias.
//! struct Qualify;
//!
//! impl ExprVisitor for Qualify {
//!     fn visit_column(&mut self, expr: &Arc<ColumnExpr>) -> Result<Arc<ColumnExpr>> {
//!         if expr.table.is_some() {
//!             return Ok(Arc::clone(expr));
//!         }
//!         Ok(Arc::new(ColumnExpr::qualified("t", expr.name.clone(), expr.sql_type.clone())))
//!     }
//! }
//!
//! let root = SelectExpr::new(QuerySource::table("users"))
//!     .columns(vec![ScalarExpr::column("id", SqlType::Int)])
//!     .into_expr();
//! let rewritten = Qualify.visit(&root).unwrap();
//! assert!(!rewritten.is_same(&root));
//! ```

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::expr::{
    AggregateExpr, ArgumentExpr, BetweenExpr, BinaryExpr, CastingExpr, ColumnAssignmentExpr,
    ColumnDeclaringExpr, ColumnExpr, DeleteExpr, ExistsExpr, ExtensionExpr, FunctionExpr,
    InListExpr, InListItems, InsertExpr, InsertFromQueryExpr, JoinExpr, OrderByExpr, QueryExpr,
    QuerySource, SameNode, ScalarExpr, SelectExpr, SqlExpr, SubqueryExpr, TableExpr, UnaryExpr,
    UnionExpr, UpdateExpr,
};

/// A rewriting visitor over expression trees.
///
/// Each method returns either the node it was given (same allocation) or a
/// replacement. Errors abort the traversal immediately.
pub trait ExprVisitor: Sized {
    /// Visits a root expression.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit(&mut self, expr: &SqlExpr) -> Result<SqlExpr> {
        walk_expr(self, expr)
    }

    /// Visits a scalar expression. The declared type is carried through.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_scalar(&mut self, expr: &ScalarExpr) -> Result<ScalarExpr> {
        walk_scalar(self, expr)
    }

    /// Visits a row source.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_query_source(&mut self, expr: &QuerySource) -> Result<QuerySource> {
        walk_query_source(self, expr)
    }

    /// Visits a query.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_query(&mut self, expr: &QueryExpr) -> Result<QueryExpr> {
        walk_query(self, expr)
    }

    /// Visits a `SELECT`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_select(&mut self, expr: &Arc<SelectExpr>) -> Result<Arc<SelectExpr>> {
        walk_select(self, expr)
    }

    /// Visits a `UNION` of two queries.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_union(&mut self, expr: &Arc<UnionExpr>) -> Result<Arc<UnionExpr>> {
        walk_union(self, expr)
    }

    /// Visits a single-row `INSERT`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_insert(&mut self, expr: &Arc<InsertExpr>) -> Result<Arc<InsertExpr>> {
        walk_insert(self, expr)
    }

    /// Visits an `INSERT` fed by a query.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_insert_from_query(
        &mut self,
        expr: &Arc<InsertFromQueryExpr>,
    ) -> Result<Arc<InsertFromQueryExpr>> {
        walk_insert_from_query(self, expr)
    }

    /// Visits an `UPDATE`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_update(&mut self, expr: &Arc<UpdateExpr>) -> Result<Arc<UpdateExpr>> {
        walk_update(self, expr)
    }

    /// Visits a `DELETE`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_delete(&mut self, expr: &Arc<DeleteExpr>) -> Result<Arc<DeleteExpr>> {
        walk_delete(self, expr)
    }

    /// Visits a table reference. Leaf node.
    ///
    /// # Errors
    ///
    /// The default never fails; overriding implementations may.
    fn visit_table(&mut self, expr: &Arc<TableExpr>) -> Result<Arc<TableExpr>> {
        Ok(Arc::clone(expr))
    }

    /// Visits a join of two row sources.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_join(&mut self, expr: &Arc<JoinExpr>) -> Result<Arc<JoinExpr>> {
        walk_join(self, expr)
    }

    /// Visits a sub-query used as a row source.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_subquery(&mut self, expr: &Arc<SubqueryExpr>) -> Result<Arc<SubqueryExpr>> {
        walk_subquery(self, expr)
    }

    /// Visits a column reference. Leaf node.
    ///
    /// # Errors
    ///
    /// The default never fails; overriding implementations may.
    fn visit_column(&mut self, expr: &Arc<ColumnExpr>) -> Result<Arc<ColumnExpr>> {
        Ok(Arc::clone(expr))
    }

    /// Visits an aliased select-list entry.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_column_declaring(
        &mut self,
        expr: &Arc<ColumnDeclaringExpr>,
    ) -> Result<Arc<ColumnDeclaringExpr>> {
        walk_column_declaring(self, expr)
    }

    /// Visits a bound argument. Leaf node.
    ///
    /// # Errors
    ///
    /// The default never fails; overriding implementations may.
    fn visit_argument(&mut self, expr: &Arc<ArgumentExpr>) -> Result<Arc<ArgumentExpr>> {
        Ok(Arc::clone(expr))
    }

    /// Visits a binary operation.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_binary(&mut self, expr: &Arc<BinaryExpr>) -> Result<Arc<BinaryExpr>> {
        walk_binary(self, expr)
    }

    /// Visits a unary operation.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_unary(&mut self, expr: &Arc<UnaryExpr>) -> Result<Arc<UnaryExpr>> {
        walk_unary(self, expr)
    }

    /// Visits a `BETWEEN` predicate.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_between(&mut self, expr: &Arc<BetweenExpr>) -> Result<Arc<BetweenExpr>> {
        walk_between(self, expr)
    }

    /// Visits an `IN` predicate.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_in_list(&mut self, expr: &Arc<InListExpr>) -> Result<Arc<InListExpr>> {
        walk_in_list(self, expr)
    }

    /// Visits an `EXISTS` predicate.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_exists(&mut self, expr: &Arc<ExistsExpr>) -> Result<Arc<ExistsExpr>> {
        walk_exists(self, expr)
    }

    /// Visits an aggregate call.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_aggregate(&mut self, expr: &Arc<AggregateExpr>) -> Result<Arc<AggregateExpr>> {
        walk_aggregate(self, expr)
    }

    /// Visits a function call.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_function(&mut self, expr: &Arc<FunctionExpr>) -> Result<Arc<FunctionExpr>> {
        walk_function(self, expr)
    }

    /// Visits a `CAST`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_casting(&mut self, expr: &Arc<CastingExpr>) -> Result<Arc<CastingExpr>> {
        walk_casting(self, expr)
    }

    /// Visits one `ORDER BY` entry.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_order_by(&mut self, expr: &Arc<OrderByExpr>) -> Result<Arc<OrderByExpr>> {
        walk_order_by(self, expr)
    }

    /// Visits each expression of a list, in order.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_expression_list(&mut self, exprs: &[ScalarExpr]) -> Result<Vec<ScalarExpr>> {
        exprs.iter().map(|e| self.visit_scalar(e)).collect()
    }

    /// Visits each entry of an ORDER BY list, in order.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_order_by_list(
        &mut self,
        exprs: &[Arc<OrderByExpr>],
    ) -> Result<Vec<Arc<OrderByExpr>>> {
        exprs.iter().map(|e| self.visit_order_by(e)).collect()
    }

    /// Visits a list of column assignments, in order.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_column_assignments(
        &mut self,
        assignments: &[Arc<ColumnAssignmentExpr>],
    ) -> Result<Vec<Arc<ColumnAssignmentExpr>>> {
        assignments
            .iter()
            .map(|a| walk_column_assignment(self, a))
            .collect()
    }

    /// Visits a dialect-defined node.
    ///
    /// The base visitor knows no extension kinds. Dialect visitors override
    /// this to route their own node kinds and call [`walk_extension`] for
    /// anything else.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedNode`] unless overridden.
    fn visit_extension(&mut self, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
        walk_extension(self, expr)
    }
}

/// Default traversal for unknown extension nodes: fails with
/// [`Error::UnsupportedNode`].
///
/// # Errors
///
/// Always.
pub fn walk_extension<V: ExprVisitor>(_visitor: &mut V, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
    Err(Error::UnsupportedNode { kind: expr.kind() })
}

/// Dispatches a root expression on its variant.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_expr<V: ExprVisitor>(v: &mut V, expr: &SqlExpr) -> Result<SqlExpr> {
    Ok(match expr {
        SqlExpr::Query(e) => SqlExpr::Query(v.visit_query(e)?),
        SqlExpr::Insert(e) => SqlExpr::Insert(v.visit_insert(e)?),
        SqlExpr::InsertFromQuery(e) => SqlExpr::InsertFromQuery(v.visit_insert_from_query(e)?),
        SqlExpr::Update(e) => SqlExpr::Update(v.visit_update(e)?),
        SqlExpr::Delete(e) => SqlExpr::Delete(v.visit_delete(e)?),
        SqlExpr::Scalar(e) => SqlExpr::Scalar(v.visit_scalar(e)?),
        SqlExpr::Source(e) => SqlExpr::Source(v.visit_query_source(e)?),
        SqlExpr::Extension(e) => SqlExpr::Extension(v.visit_extension(e)?),
    })
}

/// Dispatches a scalar expression on its variant.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_scalar<V: ExprVisitor>(v: &mut V, expr: &ScalarExpr) -> Result<ScalarExpr> {
    Ok(match expr {
        ScalarExpr::Column(e) => ScalarExpr::Column(v.visit_column(e)?),
        ScalarExpr::ColumnDeclaring(e) => ScalarExpr::ColumnDeclaring(v.visit_column_declaring(e)?),
        ScalarExpr::Argument(e) => ScalarExpr::Argument(v.visit_argument(e)?),
        ScalarExpr::Binary(e) => ScalarExpr::Binary(v.visit_binary(e)?),
        ScalarExpr::Unary(e) => ScalarExpr::Unary(v.visit_unary(e)?),
        ScalarExpr::Between(e) => ScalarExpr::Between(v.visit_between(e)?),
        ScalarExpr::InList(e) => ScalarExpr::InList(v.visit_in_list(e)?),
        ScalarExpr::Exists(e) => ScalarExpr::Exists(v.visit_exists(e)?),
        ScalarExpr::Aggregate(e) => ScalarExpr::Aggregate(v.visit_aggregate(e)?),
        ScalarExpr::Function(e) => ScalarExpr::Function(v.visit_function(e)?),
        ScalarExpr::Casting(e) => ScalarExpr::Casting(v.visit_casting(e)?),
        ScalarExpr::Extension(e) => ScalarExpr::Extension(v.visit_extension(e)?),
    })
}

/// Dispatches a row source on its variant.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_query_source<V: ExprVisitor>(v: &mut V, expr: &QuerySource) -> Result<QuerySource> {
    Ok(match expr {
        QuerySource::Table(e) => QuerySource::Table(v.visit_table(e)?),
        QuerySource::Join(e) => QuerySource::Join(v.visit_join(e)?),
        QuerySource::Subquery(e) => QuerySource::Subquery(v.visit_subquery(e)?),
        QuerySource::Extension(e) => QuerySource::Extension(v.visit_extension(e)?),
    })
}

/// Dispatches a query on its variant.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_query<V: ExprVisitor>(v: &mut V, expr: &QueryExpr) -> Result<QueryExpr> {
    Ok(match expr {
        QueryExpr::Select(e) => QueryExpr::Select(v.visit_select(e)?),
        QueryExpr::Union(e) => QueryExpr::Union(v.visit_union(e)?),
    })
}

/// Visits an optional scalar, keeping `None` as is.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn visit_optional_scalar<V: ExprVisitor>(
    v: &mut V,
    expr: Option<&ScalarExpr>,
) -> Result<Option<ScalarExpr>> {
    expr.map(|e| v.visit_scalar(e)).transpose()
}

/// Default traversal for [`SelectExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_select<V: ExprVisitor>(v: &mut V, expr: &Arc<SelectExpr>) -> Result<Arc<SelectExpr>> {
    let columns = v.visit_expression_list(&expr.columns)?;
    let from = v.visit_query_source(&expr.from)?;
    let where_clause = visit_optional_scalar(v, expr.where_clause.as_ref())?;
    let group_by = v.visit_expression_list(&expr.group_by)?;
    let having = visit_optional_scalar(v, expr.having.as_ref())?;
    let order_by = v.visit_order_by_list(&expr.order_by)?;

    if columns.is_same(&expr.columns)
        && from.is_same(&expr.from)
        && where_clause.is_same(&expr.where_clause)
        && group_by.is_same(&expr.group_by)
        && having.is_same(&expr.having)
        && order_by.is_same(&expr.order_by)
    {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(SelectExpr {
        columns,
        from,
        where_clause,
        group_by,
        having,
        distinct: expr.distinct,
        order_by,
        offset: expr.offset,
        limit: expr.limit,
    }))
}

/// Default traversal for [`UnionExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_union<V: ExprVisitor>(v: &mut V, expr: &Arc<UnionExpr>) -> Result<Arc<UnionExpr>> {
    let left = v.visit_query(&expr.left)?;
    let right = v.visit_query(&expr.right)?;
    let order_by = v.visit_order_by_list(&expr.order_by)?;

    if left.is_same(&expr.left) && right.is_same(&expr.right) && order_by.is_same(&expr.order_by) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(UnionExpr {
        left,
        right,
        is_union_all: expr.is_union_all,
        order_by,
        offset: expr.offset,
        limit: expr.limit,
    }))
}

/// Default traversal for [`InsertExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_insert<V: ExprVisitor>(v: &mut V, expr: &Arc<InsertExpr>) -> Result<Arc<InsertExpr>> {
    let table = v.visit_table(&expr.table)?;
    let assignments = v.visit_column_assignments(&expr.assignments)?;

    if table.is_same(&expr.table) && assignments.is_same(&expr.assignments) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(InsertExpr { table, assignments }))
}

/// Default traversal for [`InsertFromQueryExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_insert_from_query<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<InsertFromQueryExpr>,
) -> Result<Arc<InsertFromQueryExpr>> {
    let table = v.visit_table(&expr.table)?;
    let columns = expr
        .columns
        .iter()
        .map(|c| v.visit_column(c))
        .collect::<Result<Vec<_>>>()?;
    let query = v.visit_query(&expr.query)?;

    if table.is_same(&expr.table) && columns.is_same(&expr.columns) && query.is_same(&expr.query) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(InsertFromQueryExpr {
        table,
        columns,
        query,
    }))
}

/// Default traversal for [`UpdateExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_update<V: ExprVisitor>(v: &mut V, expr: &Arc<UpdateExpr>) -> Result<Arc<UpdateExpr>> {
    let table = v.visit_table(&expr.table)?;
    let assignments = v.visit_column_assignments(&expr.assignments)?;
    let where_clause = visit_optional_scalar(v, expr.where_clause.as_ref())?;

    if table.is_same(&expr.table)
        && assignments.is_same(&expr.assignments)
        && where_clause.is_same(&expr.where_clause)
    {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(UpdateExpr {
        table,
        assignments,
        where_clause,
    }))
}

/// Default traversal for [`DeleteExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_delete<V: ExprVisitor>(v: &mut V, expr: &Arc<DeleteExpr>) -> Result<Arc<DeleteExpr>> {
    let table = v.visit_table(&expr.table)?;
    let where_clause = visit_optional_scalar(v, expr.where_clause.as_ref())?;

    if table.is_same(&expr.table) && where_clause.is_same(&expr.where_clause) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(DeleteExpr {
        table,
        where_clause,
    }))
}

/// Default traversal for [`JoinExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_join<V: ExprVisitor>(v: &mut V, expr: &Arc<JoinExpr>) -> Result<Arc<JoinExpr>> {
    let left = v.visit_query_source(&expr.left)?;
    let right = v.visit_query_source(&expr.right)?;
    let condition = visit_optional_scalar(v, expr.condition.as_ref())?;

    if left.is_same(&expr.left) && right.is_same(&expr.right) && condition.is_same(&expr.condition)
    {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(JoinExpr {
        join_type: expr.join_type,
        left,
        right,
        condition,
    }))
}

/// Default traversal for [`SubqueryExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_subquery<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<SubqueryExpr>,
) -> Result<Arc<SubqueryExpr>> {
    let query = v.visit_query(&expr.query)?;

    if query.is_same(&expr.query) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(SubqueryExpr {
        query,
        alias: expr.alias.clone(),
    }))
}

/// Default traversal for [`ColumnDeclaringExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_column_declaring<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<ColumnDeclaringExpr>,
) -> Result<Arc<ColumnDeclaringExpr>> {
    let inner = v.visit_scalar(&expr.expr)?;

    if inner.is_same(&expr.expr) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(ColumnDeclaringExpr {
        expr: inner,
        declared_name: expr.declared_name.clone(),
    }))
}

/// Default traversal for [`BinaryExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_binary<V: ExprVisitor>(v: &mut V, expr: &Arc<BinaryExpr>) -> Result<Arc<BinaryExpr>> {
    let left = v.visit_scalar(&expr.left)?;
    let right = v.visit_scalar(&expr.right)?;

    if left.is_same(&expr.left) && right.is_same(&expr.right) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(BinaryExpr {
        op: expr.op,
        left,
        right,
        sql_type: expr.sql_type.clone(),
    }))
}

/// Default traversal for [`UnaryExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_unary<V: ExprVisitor>(v: &mut V, expr: &Arc<UnaryExpr>) -> Result<Arc<UnaryExpr>> {
    let operand = v.visit_scalar(&expr.operand)?;

    if operand.is_same(&expr.operand) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(UnaryExpr {
        op: expr.op,
        operand,
        sql_type: expr.sql_type.clone(),
    }))
}

/// Default traversal for [`BetweenExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_between<V: ExprVisitor>(v: &mut V, expr: &Arc<BetweenExpr>) -> Result<Arc<BetweenExpr>> {
    let inner = v.visit_scalar(&expr.expr)?;
    let lower = v.visit_scalar(&expr.lower)?;
    let upper = v.visit_scalar(&expr.upper)?;

    if inner.is_same(&expr.expr) && lower.is_same(&expr.lower) && upper.is_same(&expr.upper) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(BetweenExpr {
        expr: inner,
        lower,
        upper,
        not_between: expr.not_between,
    }))
}

/// Default traversal for [`InListExpr`], covering both value lists and sub-queries.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_in_list<V: ExprVisitor>(v: &mut V, expr: &Arc<InListExpr>) -> Result<Arc<InListExpr>> {
    let left = v.visit_scalar(&expr.left)?;
    let (items, items_same) = match &expr.items {
        InListItems::Values(values) => {
            let visited = v.visit_expression_list(values)?;
            let same = visited.is_same(values);
            (InListItems::Values(visited), same)
        }
        InListItems::Query(query) => {
            let visited = v.visit_query(query)?;
            let same = visited.is_same(query);
            (InListItems::Query(visited), same)
        }
    };

    if left.is_same(&expr.left) && items_same {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(InListExpr {
        left,
        items,
        not_in: expr.not_in,
    }))
}

/// Default traversal for [`ExistsExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_exists<V: ExprVisitor>(v: &mut V, expr: &Arc<ExistsExpr>) -> Result<Arc<ExistsExpr>> {
    let query = v.visit_query(&expr.query)?;

    if query.is_same(&expr.query) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(ExistsExpr {
        query,
        not_exists: expr.not_exists,
    }))
}

/// Default traversal for [`AggregateExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_aggregate<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<AggregateExpr>,
) -> Result<Arc<AggregateExpr>> {
    let argument = visit_optional_scalar(v, expr.argument.as_ref())?;

    if argument.is_same(&expr.argument) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(AggregateExpr {
        aggregate: expr.aggregate,
        argument,
        distinct: expr.distinct,
        sql_type: expr.sql_type.clone(),
    }))
}

/// Default traversal for [`FunctionExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_function<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<FunctionExpr>,
) -> Result<Arc<FunctionExpr>> {
    let args = v.visit_expression_list(&expr.args)?;

    if args.is_same(&expr.args) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(FunctionExpr {
        name: expr.name.clone(),
        args,
        sql_type: expr.sql_type.clone(),
    }))
}

/// Default traversal for [`CastingExpr`]. The target type is kept.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_casting<V: ExprVisitor>(v: &mut V, expr: &Arc<CastingExpr>) -> Result<Arc<CastingExpr>> {
    let inner = v.visit_scalar(&expr.expr)?;

    if inner.is_same(&expr.expr) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(CastingExpr {
        expr: inner,
        sql_type: expr.sql_type.clone(),
    }))
}

/// Default traversal for [`OrderByExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_order_by<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<OrderByExpr>,
) -> Result<Arc<OrderByExpr>> {
    let inner = v.visit_scalar(&expr.expr)?;

    if inner.is_same(&expr.expr) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(OrderByExpr {
        expr: inner,
        order: expr.order,
    }))
}

/// Default traversal for one [`ColumnAssignmentExpr`]: the column, then the value.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_column_assignment<V: ExprVisitor>(
    v: &mut V,
    expr: &Arc<ColumnAssignmentExpr>,
) -> Result<Arc<ColumnAssignmentExpr>> {
    let column = v.visit_column(&expr.column)?;
    let value = v.visit_scalar(&expr.expr)?;

    if column.is_same(&expr.column) && value.is_same(&expr.expr) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(ColumnAssignmentExpr {
        column,
        expr: value,
    }))
}

/// Visits every row of a multi-row assignment list.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn visit_assignment_rows<V: ExprVisitor>(
    v: &mut V,
    rows: &[Vec<Arc<ColumnAssignmentExpr>>],
) -> Result<(Vec<Vec<Arc<ColumnAssignmentExpr>>>, bool)> {
    let mut changed = false;
    let mut result = Vec::with_capacity(rows.len());

    for row in rows {
        let visited = v.visit_column_assignments(row)?;
        if !visited.is_same(row) {
            changed = true;
        }
        result.push(visited);
    }

    Ok((result, changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::OrderByExpr;
    use crate::types::SqlType;

    struct Identity;

    impl ExprVisitor for Identity {}

    /// Replaces every argument with a fresh but value-equal allocation.
    struct Realloc;

    impl ExprVisitor for Realloc {
        fn visit_argument(&mut self, expr: &Arc<ArgumentExpr>) -> Result<Arc<ArgumentExpr>> {
            Ok(Arc::new(ArgumentExpr::clone(expr)))
        }
    }

    fn sample_select() -> SqlExpr {
        let id = ScalarExpr::column("id", SqlType::Int);
        SelectExpr::new(QuerySource::table("users"))
            .columns(vec![id.clone(), ScalarExpr::column("name", SqlType::Varchar(None))])
            .where_clause(id.clone().gt(ScalarExpr::argument(10, SqlType::Int)))
            .order_by(vec![OrderByExpr::desc(id)])
            .limit(5)
            .into_expr()
    }

    #[test]
    fn test_identity_visitor_returns_same_root() {
        let root = sample_select();
        let result = Identity.visit(&root).unwrap();
        assert!(result.is_same(&root));
    }

    #[test]
    fn test_value_equal_replacement_counts_as_changed() {
        let root = sample_select();
        let result = Realloc.visit(&root).unwrap();
        assert!(!result.is_same(&root));

        let (SqlExpr::Query(QueryExpr::Select(before)), SqlExpr::Query(QueryExpr::Select(after))) =
            (&root, &result)
        else {
            panic!("expected select");
        };
        // Untouched siblings keep their identity.
        assert!(after.from.is_same(&before.from));
        assert!(after.columns.is_same(&before.columns));
        assert!(after.order_by.is_same(&before.order_by));
        assert!(!after.where_clause.is_same(&before.where_clause));
        assert_eq!(after.limit, Some(5));
    }

    #[test]
    fn test_unknown_extension_fails() {
        #[derive(Debug)]
        struct Unknown;

        impl crate::expr::ExtensionNode for Unknown {
            fn kind(&self) -> &'static str {
                "unknown"
            }
        }

        let root = SqlExpr::Extension(ExtensionExpr::new(Unknown));
        let err = Identity.visit(&root).unwrap_err();
        assert_eq!(err, Error::UnsupportedNode { kind: "unknown" });
    }

    #[test]
    fn test_assignment_rows() {
        let row = vec![ColumnAssignmentExpr::new(
            ColumnExpr::new("a", SqlType::Int),
            ScalarExpr::argument(1, SqlType::Int),
        )];
        let rows = vec![row.clone(), row];

        let (visited, changed) = visit_assignment_rows(&mut Identity, &rows).unwrap();
        assert!(!changed);
        assert!(visited[1].is_same(&rows[1]));

        let (_, changed) = visit_assignment_rows(&mut Realloc, &rows).unwrap();
        assert!(changed);
    }
}
