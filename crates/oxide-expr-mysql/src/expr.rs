//! MySQL-specific expression nodes.

use std::fmt;
use std::sync::Arc;

use oxide_expr_core::expr::{
    ColumnAssignmentExpr, ExtensionExpr, ExtensionNode, QuerySource, ScalarExpr, SqlExpr,
    TableExpr,
};
use oxide_expr_core::{Error, Result, SqlType};

/// `INSERT ... ON DUPLICATE KEY UPDATE ...`.
#[derive(Debug, Clone)]
pub struct InsertOrUpdateExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// Column/value pairs of the inserted row.
    pub assignments: Vec<Arc<ColumnAssignmentExpr>>,
    /// Assignments applied when the row already exists.
    pub update_assignments: Vec<Arc<ColumnAssignmentExpr>>,
}

impl InsertOrUpdateExpr {
    /// Wraps the node as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Extension(ExtensionExpr::new(self))
    }
}

impl ExtensionNode for InsertOrUpdateExpr {
    fn kind(&self) -> &'static str {
        "insert_or_update"
    }
}

/// A multi-row `INSERT ... VALUES (...), (...)`.
///
/// Every row must assign the same columns in the same order; the first row
/// determines the column list.
#[derive(Debug, Clone)]
pub struct BulkInsertExpr {
    /// Target table.
    pub table: Arc<TableExpr>,
    /// One assignment list per row.
    pub rows: Vec<Vec<Arc<ColumnAssignmentExpr>>>,
}

impl BulkInsertExpr {
    /// Wraps the node as a root expression.
    #[must_use]
    pub fn into_expr(self) -> SqlExpr {
        SqlExpr::Extension(ExtensionExpr::new(self))
    }

    /// Checks that there is at least one row and that all rows target the
    /// columns of the first, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedBulkInsert`] describing the first problem
    /// found.
    pub fn validate(&self) -> Result<()> {
        let Some(first) = self.rows.first() else {
            return Err(Error::MalformedBulkInsert(format!(
                "no rows to insert into '{}'",
                self.table.name
            )));
        };

        for (i, row) in self.rows.iter().enumerate().skip(1) {
            let matches = row.len() == first.len()
                && row
                    .iter()
                    .zip(first)
                    .all(|(a, b)| a.column.name == b.column.name);
            if !matches {
                return Err(Error::MalformedBulkInsert(format!(
                    "row {i} assigns ({}) but row 0 assigns ({})",
                    column_names(row),
                    column_names(first)
                )));
            }
        }

        Ok(())
    }
}

impl ExtensionNode for BulkInsertExpr {
    fn kind(&self) -> &'static str {
        "bulk_insert"
    }
}

fn column_names(row: &[Arc<ColumnAssignmentExpr>]) -> String {
    row.iter()
        .map(|a| a.column.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `left NATURAL JOIN right`.
#[derive(Debug, Clone)]
pub struct NaturalJoinExpr {
    /// Left side.
    pub left: QuerySource,
    /// Right side.
    pub right: QuerySource,
}

impl ExtensionNode for NaturalJoinExpr {
    fn kind(&self) -> &'static str {
        "natural_join"
    }
}

/// Full-text search modifiers for `MATCH ... AGAINST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchModifier {
    /// `IN NATURAL LANGUAGE MODE`
    NaturalLanguageMode,
    /// `IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION`
    NaturalLanguageModeWithQueryExpansion,
    /// `IN BOOLEAN MODE`
    BooleanMode,
    /// `WITH QUERY EXPANSION`
    WithQueryExpansion,
}

impl SearchModifier {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalLanguageMode => "IN NATURAL LANGUAGE MODE",
            Self::NaturalLanguageModeWithQueryExpansion => {
                "IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION"
            }
            Self::BooleanMode => "IN BOOLEAN MODE",
            Self::WithQueryExpansion => "WITH QUERY EXPANSION",
        }
    }
}

impl fmt::Display for SearchModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `MATCH (cols) AGAINST (? [modifier])`.
#[derive(Debug, Clone)]
pub struct MatchAgainstExpr {
    /// Columns of the full-text index.
    pub match_columns: Vec<ScalarExpr>,
    /// Search string, bound as a parameter.
    pub search_string: String,
    /// Optional search modifier.
    pub search_modifier: Option<SearchModifier>,
}

impl ExtensionNode for MatchAgainstExpr {
    fn kind(&self) -> &'static str {
        "match_against"
    }

    fn sql_type(&self) -> Option<SqlType> {
        Some(SqlType::Boolean)
    }
}

/// Creates an upsert. `update_assignments` may be empty, in which case no
/// `ON DUPLICATE KEY UPDATE` clause is written.
#[must_use]
pub fn insert_or_update(
    table: TableExpr,
    assignments: Vec<Arc<ColumnAssignmentExpr>>,
    update_assignments: Vec<Arc<ColumnAssignmentExpr>>,
) -> SqlExpr {
    InsertOrUpdateExpr {
        table: Arc::new(table),
        assignments,
        update_assignments,
    }
    .into_expr()
}

/// Creates a multi-row insert. The rows are checked when formatting.
#[must_use]
pub fn bulk_insert(table: TableExpr, rows: Vec<Vec<Arc<ColumnAssignmentExpr>>>) -> SqlExpr {
    BulkInsertExpr {
        table: Arc::new(table),
        rows,
    }
    .into_expr()
}

/// Creates `left NATURAL JOIN right`.
#[must_use]
pub fn natural_join(left: QuerySource, right: QuerySource) -> QuerySource {
    QuerySource::Extension(ExtensionExpr::new(NaturalJoinExpr { left, right }))
}

/// Creates a full-text search predicate over `columns`.
#[must_use]
pub fn match_against(
    columns: Vec<ScalarExpr>,
    search_string: impl Into<String>,
    search_modifier: Option<SearchModifier>,
) -> ScalarExpr {
    ScalarExpr::Extension(ExtensionExpr::new(MatchAgainstExpr {
        match_columns: columns,
        search_string: search_string.into(),
        search_modifier,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_expr_core::expr::ColumnExpr;

    fn row(columns: &[&str]) -> Vec<Arc<ColumnAssignmentExpr>> {
        columns
            .iter()
            .map(|c| {
                ColumnAssignmentExpr::new(
                    ColumnExpr::new(*c, SqlType::Int),
                    ScalarExpr::argument(1, SqlType::Int),
                )
            })
            .collect()
    }

    fn bulk(rows: Vec<Vec<Arc<ColumnAssignmentExpr>>>) -> BulkInsertExpr {
        BulkInsertExpr {
            table: Arc::new(TableExpr::new("t")),
            rows,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(bulk(vec![row(&["a", "b"]), row(&["a", "b"])]).validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let err = bulk(vec![]).validate().unwrap_err();
        assert!(matches!(err, Error::MalformedBulkInsert(msg) if msg.contains("no rows")));
    }

    #[test]
    fn test_validate_mismatch() {
        let err = bulk(vec![row(&["a", "b"]), row(&["a", "c"])])
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            Error::MalformedBulkInsert(String::from("row 1 assigns (a, c) but row 0 assigns (a, b)"))
        );

        let err = bulk(vec![row(&["a", "b"]), row(&["a"])]).validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_search_modifier() {
        assert_eq!(SearchModifier::BooleanMode.to_string(), "IN BOOLEAN MODE");
        assert_eq!(
            SearchModifier::NaturalLanguageModeWithQueryExpansion.as_str(),
            "IN NATURAL LANGUAGE MODE WITH QUERY EXPANSION"
        );
    }

    #[test]
    fn test_constructors() {
        let source = natural_join(QuerySource::table("a"), QuerySource::table("b"));
        assert_eq!(source.kind(), "natural_join");

        let predicate = match_against(
            vec![ScalarExpr::column("title", SqlType::Text)],
            "rust",
            None,
        );
        assert_eq!(predicate.kind(), "match_against");
        assert_eq!(predicate.sql_type(), SqlType::Boolean);
    }
}
