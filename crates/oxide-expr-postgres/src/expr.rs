//! PostgreSQL-specific expression nodes.

use std::sync::Arc;

use oxide_expr_core::expr::{
    ColumnAssignmentExpr, ColumnExpr, ExtensionExpr, ExtensionNode, ScalarExpr, SqlExpr,
    TableExpr,
};
use oxide_expr_core::{Error, Result, SqlType};

/// `left ILIKE right`: case-insensitive LIKE.
#[derive(Debug, Clone)]
pub struct ILikeExpr {
    /// The tested expression.
    pub left: ScalarExpr,
    /// The pattern.
    pub right: ScalarExpr,
}

impl ExtensionNode for ILikeExpr {
    fn kind(&self) -> &'static str {
        "ilike"
    }

    fn sql_type(&self) -> Option<SqlType> {
        Some(SqlType::Boolean)
    }
}

/// `INSERT ... ON CONFLICT (cols) DO UPDATE SET ...` or `DO NOTHING`.
#[derive(Debug, Clone)]
pub struct InsertOrUpdateExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// Column/value pairs of the inserted row.
    pub assignments: Vec<Arc<ColumnAssignmentExpr>>,
    /// Conflict target columns.
    pub conflict_columns: Vec<Arc<ColumnExpr>>,
    /// Assignments applied on conflict.
    pub update_assignments: Vec<Arc<ColumnAssignmentExpr>>,
}

impl InsertOrUpdateExpr {
    /// Wraps the node as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Extension(ExtensionExpr::new(self))
    }

    /// Checks that update assignments come with a conflict target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConflictTarget`] if there are update
    /// assignments but no conflict columns.
    pub fn validate(&self) -> Result<()> {
        if self.conflict_columns.is_empty() && !self.update_assignments.is_empty() {
            return Err(Error::MissingConflictTarget {
                table: self.table.name.clone(),
            });
        }
        Ok(())
    }
}

impl ExtensionNode for InsertOrUpdateExpr {
    fn kind(&self) -> &'static str {
        "insert_or_update"
    }
}

/// Creates `left ILIKE right`.
#[must_use]
pub fn ilike(left: ScalarExpr, right: ScalarExpr) -> ScalarExpr {
    ScalarExpr::Extension(ExtensionExpr::new(ILikeExpr { left, right }))
}

/// Creates `left ILIKE ?`, binding `pattern` as a `VARCHAR`.
#[must_use]
pub fn ilike_pattern(left: ScalarExpr, pattern: impl Into<String>) -> ScalarExpr {
    let right = ScalarExpr::argument(pattern.into(), SqlType::Varchar(None));
    ilike(left, right)
}

/// Creates an upsert.
///
/// With no update assignments the conflict action is `DO NOTHING`; with
/// neither conflict columns nor update assignments the statement is a plain
/// insert.
#[must_use]
pub fn insert_or_update(
    table: TableExpr,
    assignments: Vec<Arc<ColumnAssignmentExpr>>,
    conflict_columns: Vec<ColumnExpr>,
    update_assignments: Vec<Arc<ColumnAssignmentExpr>>,
) -> SqlExpr {
    InsertOrUpdateExpr {
        table: Arc::new(table),
        assignments,
        conflict_columns: conflict_columns.into_iter().map(Arc::new).collect(),
        update_assignments,
    }
    .into_expr()
}
