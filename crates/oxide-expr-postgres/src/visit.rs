//! Rewriting visitor for trees that contain PostgreSQL nodes.
//!
//! Implement [`PostgresExprVisitor`] and route
//! [`ExprVisitor::visit_extension`] through [`walk_extension`].

use std::sync::Arc;

use oxide_expr_core::expr::{ExtensionExpr, SameNode};
use oxide_expr_core::visit::{self, ExprVisitor};
use oxide_expr_core::Result;

use crate::expr::{ILikeExpr, InsertOrUpdateExpr};

/// Per-node hooks for PostgreSQL node kinds.
pub trait PostgresExprVisitor: ExprVisitor {
    /// Visits an `ILIKE` predicate.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_ilike(&mut self, expr: &Arc<ILikeExpr>) -> Result<Arc<ILikeExpr>> {
        walk_ilike(self, expr)
    }

    /// Visits an upsert.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_insert_or_update(
        &mut self,
        expr: &Arc<InsertOrUpdateExpr>,
    ) -> Result<Arc<InsertOrUpdateExpr>> {
        walk_insert_or_update(self, expr)
    }
}

/// Routes PostgreSQL node kinds to their [`PostgresExprVisitor`] hooks and
/// anything else to the base visitor's extension handling.
///
/// # Errors
///
/// Propagates hook errors; fails with
/// [`oxide_expr_core::Error::UnsupportedNode`] for unknown node kinds.
pub fn walk_extension<V: PostgresExprVisitor>(
    v: &mut V,
    expr: &ExtensionExpr,
) -> Result<ExtensionExpr> {
    if let Some(node) = expr.downcast::<ILikeExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_ilike(&node)?));
    }
    if let Some(node) = expr.downcast::<InsertOrUpdateExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_insert_or_update(&node)?));
    }
    visit::walk_extension(v, expr)
}

/// Default traversal for [`ILikeExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_ilike<V: PostgresExprVisitor>(v: &mut V, expr: &Arc<ILikeExpr>) -> Result<Arc<ILikeExpr>> {
    let left = v.visit_scalar(&expr.left)?;
    let right = v.visit_scalar(&expr.right)?;

    if left.is_same(&expr.left) && right.is_same(&expr.right) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(ILikeExpr { left, right }))
}

/// Default traversal for [`InsertOrUpdateExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_insert_or_update<V: PostgresExprVisitor>(
    v: &mut V,
    expr: &Arc<InsertOrUpdateExpr>,
) -> Result<Arc<InsertOrUpdateExpr>> {
    let table = v.visit_table(&expr.table)?;
    let assignments = v.visit_column_assignments(&expr.assignments)?;
    let conflict_columns = expr
        .conflict_columns
        .iter()
        .map(|c| v.visit_column(c))
        .collect::<Result<Vec<_>>>()?;
    let update_assignments = v.visit_column_assignments(&expr.update_assignments)?;

    if table.is_same(&expr.table)
        && assignments.is_same(&expr.assignments)
        && conflict_columns.is_same(&expr.conflict_columns)
        && update_assignments.is_same(&expr.update_assignments)
    {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(InsertOrUpdateExpr {
        table,
        assignments,
        conflict_columns,
        update_assignments,
    }))
}
