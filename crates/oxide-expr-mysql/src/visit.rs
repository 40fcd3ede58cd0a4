//! Rewriting visitor for trees that contain MySQL nodes.
//!
//! A visitor that should see MySQL nodes implements [`MySqlExprVisitor`] and
//! routes its [`ExprVisitor::visit_extension`] through [`walk_extension`]:
//!
//! ```rust
//! use oxide_expr_core::expr::ExtensionExpr;
//! use oxide_expr_core::visit::ExprVisitor;
//! use oxide_expr_core::Result;
//! use oxide_expr_mysql::visit::{walk_extension, MySqlExprVisitor};
//!
//! struct Noop;
//!
//! impl ExprVisitor for Noop {
//!     fn visit_extension(&mut self, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
//!         walk_extension(self, expr)
//!     }
//! }
//!
//! impl MySqlExprVisitor for Noop {}
//! ```

use std::sync::Arc;

use oxide_expr_core::expr::{ExtensionExpr, SameNode};
use oxide_expr_core::visit::{self, visit_assignment_rows, ExprVisitor};
use oxide_expr_core::Result;

use crate::expr::{BulkInsertExpr, InsertOrUpdateExpr, MatchAgainstExpr, NaturalJoinExpr};

/// Per-node hooks for MySQL node kinds.
pub trait MySqlExprVisitor: ExprVisitor {
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

    /// Visits a multi-row insert.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_bulk_insert(&mut self, expr: &Arc<BulkInsertExpr>) -> Result<Arc<BulkInsertExpr>> {
        walk_bulk_insert(self, expr)
    }

    /// Visits a `NATURAL JOIN`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_natural_join(&mut self, expr: &Arc<NaturalJoinExpr>) -> Result<Arc<NaturalJoinExpr>> {
        walk_natural_join(self, expr)
    }

    /// Visits a full-text `MATCH ... AGAINST` predicate.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by the visitor.
    fn visit_match_against(
        &mut self,
        expr: &Arc<MatchAgainstExpr>,
    ) -> Result<Arc<MatchAgainstExpr>> {
        walk_match_against(self, expr)
    }
}

/// Routes MySQL node kinds to their [`MySqlExprVisitor`] hooks and anything
/// else to the base visitor's extension handling.
///
/// # Errors
///
/// Propagates hook errors; fails with
/// [`oxide_expr_core::Error::UnsupportedNode`] for unknown node kinds.
pub fn walk_extension<V: MySqlExprVisitor>(v: &mut V, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
    if let Some(node) = expr.downcast::<InsertOrUpdateExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_insert_or_update(&node)?));
    }
    if let Some(node) = expr.downcast::<BulkInsertExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_bulk_insert(&node)?));
    }
    if let Some(node) = expr.downcast::<NaturalJoinExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_natural_join(&node)?));
    }
    if let Some(node) = expr.downcast::<MatchAgainstExpr>() {
        return Ok(ExtensionExpr::from_arc(v.visit_match_against(&node)?));
    }
    visit::walk_extension(v, expr)
}

/// Default traversal for [`InsertOrUpdateExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_insert_or_update<V: MySqlExprVisitor>(
    v: &mut V,
    expr: &Arc<InsertOrUpdateExpr>,
) -> Result<Arc<InsertOrUpdateExpr>> {
    let table = v.visit_table(&expr.table)?;
    let assignments = v.visit_column_assignments(&expr.assignments)?;
    let update_assignments = v.visit_column_assignments(&expr.update_assignments)?;

    if table.is_same(&expr.table)
        && assignments.is_same(&expr.assignments)
        && update_assignments.is_same(&expr.update_assignments)
    {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(InsertOrUpdateExpr {
        table,
        assignments,
        update_assignments,
    }))
}

/// Default traversal for [`BulkInsertExpr`], row by row.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_bulk_insert<V: MySqlExprVisitor>(
    v: &mut V,
    expr: &Arc<BulkInsertExpr>,
) -> Result<Arc<BulkInsertExpr>> {
    let table = v.visit_table(&expr.table)?;
    let (rows, rows_changed) = visit_assignment_rows(v, &expr.rows)?;

    if table.is_same(&expr.table) && !rows_changed {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(BulkInsertExpr { table, rows }))
}

/// Default traversal for [`NaturalJoinExpr`].
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_natural_join<V: MySqlExprVisitor>(
    v: &mut V,
    expr: &Arc<NaturalJoinExpr>,
) -> Result<Arc<NaturalJoinExpr>> {
    let left = v.visit_query_source(&expr.left)?;
    let right = v.visit_query_source(&expr.right)?;

    if left.is_same(&expr.left) && right.is_same(&expr.right) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(NaturalJoinExpr { left, right }))
}

/// Default traversal for [`MatchAgainstExpr`]. The search string is kept.
///
/// # Errors
///
/// Propagates any error returned by the visitor.
pub fn walk_match_against<V: MySqlExprVisitor>(
    v: &mut V,
    expr: &Arc<MatchAgainstExpr>,
) -> Result<Arc<MatchAgainstExpr>> {
    let match_columns = v.visit_expression_list(&expr.match_columns)?;

    if match_columns.is_same(&expr.match_columns) {
        return Ok(Arc::clone(expr));
    }

    Ok(Arc::new(MatchAgainstExpr {
        match_columns,
        search_string: expr.search_string.clone(),
        search_modifier: expr.search_modifier,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_expr_core::expr::{
        ColumnAssignmentExpr, ColumnExpr, QuerySource, ScalarExpr, SelectExpr, TableExpr,
    };
    use oxide_expr_core::{Error, SqlType};

    use crate::expr::{bulk_insert, insert_or_update, match_against, natural_join};

    struct Noop;

    impl ExprVisitor for Noop {
        fn visit_extension(&mut self, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
            walk_extension(self, expr)
        }
    }

    impl MySqlExprVisitor for Noop {}

    /// Upper-cases every column name.
    struct Shout;

    impl ExprVisitor for Shout {
        fn visit_column(&mut self, expr: &Arc<ColumnExpr>) -> Result<Arc<ColumnExpr>> {
            Ok(Arc::new(ColumnExpr {
                name: expr.name.to_uppercase(),
                ..ColumnExpr::clone(expr)
            }))
        }

        fn visit_extension(&mut self, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
            walk_extension(self, expr)
        }
    }

    impl MySqlExprVisitor for Shout {}

    fn row(value: i64) -> Vec<Arc<ColumnAssignmentExpr>> {
        vec![ColumnAssignmentExpr::new(
            ColumnExpr::new("a", SqlType::Int),
            ScalarExpr::argument(value, SqlType::Int),
        )]
    }

    #[test]
    fn test_noop_preserves_identity() {
        let source = natural_join(QuerySource::table("a"), QuerySource::table("b"));
        let root = SelectExpr::new(source)
            .where_clause(match_against(
                vec![ScalarExpr::column("title", SqlType::Text)],
                "rust",
                None,
            ))
            .into_expr();
        assert!(Noop.visit(&root).unwrap().is_same(&root));

        let bulk = bulk_insert(TableExpr::new("t"), vec![row(1), row(2)]);
        assert!(Noop.visit(&bulk).unwrap().is_same(&bulk));
    }

    #[test]
    fn test_rewrite_reaches_mysql_nodes() {
        let predicate = match_against(
            vec![ScalarExpr::column("title", SqlType::Text)],
            "rust",
            None,
        );
        let root = oxide_expr_core::SqlExpr::Scalar(predicate);
        let result = Shout.visit(&root).unwrap();
        assert!(!result.is_same(&root));

        let oxide_expr_core::SqlExpr::Scalar(ScalarExpr::Extension(ext)) = result else {
            panic!("expected extension scalar");
        };
        let node = ext.downcast_ref::<MatchAgainstExpr>().unwrap();
        assert!(matches!(
            &node.match_columns[0],
            ScalarExpr::Column(c) if c.name == "TITLE"
        ));
        assert_eq!(node.search_string, "rust");
    }

    #[test]
    fn test_bulk_rows_rewritten() {
        let root = bulk_insert(TableExpr::new("t"), vec![row(1), row(2)]);
        let result = Shout.visit(&root).unwrap();
        let oxide_expr_core::SqlExpr::Extension(ext) = result else {
            panic!("expected extension root");
        };
        let node = ext.downcast_ref::<BulkInsertExpr>().unwrap();
        assert!(node.rows.iter().flatten().all(|a| a.column.name == "A"));
    }

    #[test]
    fn test_upsert_assignments_rewritten() {
        let updates = vec![ColumnAssignmentExpr::new(
            ColumnExpr::new("b", SqlType::Int),
            ScalarExpr::column("b", SqlType::Int),
        )];
        let root = insert_or_update(TableExpr::new("t"), row(1), updates);
        assert!(Noop.visit(&root).unwrap().is_same(&root));

        let result = Shout.visit(&root).unwrap();
        assert!(!result.is_same(&root));
        let oxide_expr_core::SqlExpr::Extension(ext) = result else {
            panic!("expected extension root");
        };
        let node = ext.downcast_ref::<InsertOrUpdateExpr>().unwrap();
        assert_eq!(node.table.name, "t");
        assert_eq!(node.assignments[0].column.name, "A");
        assert_eq!(node.update_assignments[0].column.name, "B");
        assert!(matches!(
            &node.update_assignments[0].expr,
            ScalarExpr::Column(c) if c.name == "B"
        ));
    }

    #[test]
    fn test_base_visitor_rejects_mysql_nodes() {
        struct Plain;
        impl ExprVisitor for Plain {}

        let root = bulk_insert(TableExpr::new("t"), vec![row(1)]);
        assert_eq!(
            Plain.visit(&root).unwrap_err(),
            Error::UnsupportedNode {
                kind: "bulk_insert"
            }
        );
    }
}
