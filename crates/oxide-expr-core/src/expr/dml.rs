//! Table mutation nodes: INSERT, UPDATE and DELETE.

use std::sync::Arc;

use super::query::{QueryExpr, TableExpr};
use super::scalar::{ColumnExpr, ScalarExpr};
use super::SqlExpr;

/// `column = expr`, used in SET lists and as insert row cells.
#[derive(Debug, Clone)]
pub struct ColumnAssignmentExpr {
    /// Target column.
    pub column: Arc<ColumnExpr>,
    /// Assigned value.
    pub expr: ScalarExpr,
}

impl ColumnAssignmentExpr {
    /// Creates an assignment.
    #[must_use]
    pub fn new(column: ColumnExpr, expr: ScalarExpr) -> Arc<Self> {
        Arc::new(Self {
            column: Arc::new(column),
            expr,
        })
    }
}

/// `INSERT INTO table (cols) VALUES (...)`.
#[derive(Debug, Clone)]
pub struct InsertExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// Column/value pairs of the single row.
    pub assignments: Vec<Arc<ColumnAssignmentExpr>>,
}

impl InsertExpr {
    /// Creates an insert statement.
    #[must_use]
    pub fn new(table: TableExpr, assignments: Vec<Arc<ColumnAssignmentExpr>>) -> Self {
        Self {
            table: Arc::new(table),
            assignments,
        }
    }

    /// Finishes construction as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Insert(Arc::new(self))
    }
}

/// `INSERT INTO table (cols) SELECT ...`.
#[derive(Debug, Clone)]
pub struct InsertFromQueryExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// Target columns.
    pub columns: Vec<Arc<ColumnExpr>>,
    /// Row-producing query.
    pub query: QueryExpr,
}

impl InsertFromQueryExpr {
    /// Finishes construction as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::InsertFromQuery(Arc::new(self))
    }
}

/// `UPDATE table SET ... [WHERE ...]`.
#[derive(Debug, Clone)]
pub struct UpdateExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// SET assignments.
    pub assignments: Vec<Arc<ColumnAssignmentExpr>>,
    /// WHERE condition.
    pub where_clause: Option<ScalarExpr>,
}

impl UpdateExpr {
    /// Creates an update statement.
    #[must_use]
    pub fn new(
        table: TableExpr,
        assignments: Vec<Arc<ColumnAssignmentExpr>>,
        where_clause: Option<ScalarExpr>,
    ) -> Self {
        Self {
            table: Arc::new(table),
            assignments,
            where_clause,
        }
    }

    /// Finishes construction as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Update(Arc::new(self))
    }
}

/// `DELETE FROM table [WHERE ...]`.
#[derive(Debug, Clone)]
pub struct DeleteExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// WHERE condition.
    pub where_clause: Option<ScalarExpr>,
}

impl DeleteExpr {
    /// Creates a delete statement.
    #[must_use]
    pub fn new(table: TableExpr, where_clause: Option<ScalarExpr>) -> Self {
        Self {
            table: Arc::new(table),
            where_clause,
        }
    }

    /// Finishes construction as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Delete(Arc::new(self))
    }
}
