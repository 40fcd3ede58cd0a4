//! Rendering of MySQL nodes.
//!
//! The writers accept any formatter, so a dialect building on MySQL can
//! reuse them from its own `format_extension`.

use std::sync::Arc;

use oxide_expr_core::dialect::pagination_arguments;
use oxide_expr_core::expr::{ArgumentExpr, ColumnAssignmentExpr, QueryExpr, TableExpr};
use oxide_expr_core::visit::ExprVisitor;
use oxide_expr_core::{Indentation, Result, SqlFormatter, SqlType};
use tracing::warn;

use crate::expr::{BulkInsertExpr, InsertOrUpdateExpr, MatchAgainstExpr, NaturalJoinExpr};

/// Writes `INSERT INTO t (cols) VALUES `.
fn write_insert_head(
    f: &mut SqlFormatter<'_>,
    table: &TableExpr,
    row: &[Arc<ColumnAssignmentExpr>],
) {
    f.write_keyword("INSERT INTO");
    f.write_table_name(table);
    f.write_column_names(row.iter().map(|a| a.column.as_ref()));
    f.write_keyword("VALUES");
}

/// `INSERT INTO t (cols) VALUES (row) [ON DUPLICATE KEY UPDATE ...]`.
///
/// # Errors
///
/// Propagates formatting errors from the assigned values.
pub fn write_insert_or_update(
    f: &mut SqlFormatter<'_>,
    expr: &InsertOrUpdateExpr,
) -> Result<()> {
    write_insert_head(f, &expr.table, &expr.assignments);
    f.write_values(expr.assignments.iter().map(|a| &a.expr))?;

    if !expr.update_assignments.is_empty() {
        f.write_keyword("ON DUPLICATE KEY UPDATE");
        f.write_column_assignments(&expr.update_assignments)?;
    }

    Ok(())
}

/// `INSERT INTO t (cols) VALUES (row0), (row1), ...`.
///
/// # Errors
///
/// Returns [`oxide_expr_core::Error::MalformedBulkInsert`] if there are no
/// rows or a row's columns differ from the first row's.
pub fn write_bulk_insert(
    f: &mut SqlFormatter<'_>,
    expr: &BulkInsertExpr,
) -> Result<()> {
    if let Err(e) = expr.validate() {
        warn!(table = %expr.table.name, error = %e, "rejecting bulk insert");
        return Err(e);
    }

    let first = expr.rows.first().map_or(&[][..], Vec::as_slice);
    write_insert_head(f, &expr.table, first);

    for (i, row) in expr.rows.iter().enumerate() {
        if i > 0 {
            f.remove_last_blank();
            f.write(", ");
        }
        f.write_values(row.iter().map(|a| &a.expr))?;
    }

    Ok(())
}

/// `left NATURAL JOIN right`.
///
/// # Errors
///
/// Propagates formatting errors from either side.
pub fn write_natural_join(
    f: &mut SqlFormatter<'_>,
    expr: &NaturalJoinExpr,
) -> Result<()> {
    f.visit_query_source(&expr.left)?;
    f.new_line(Indentation::Same)?;
    f.write_keyword("NATURAL JOIN");
    f.visit_query_source(&expr.right)?;
    Ok(())
}

/// `MATCH (cols) AGAINST (? [modifier])`, binding the search string.
///
/// # Errors
///
/// Propagates formatting errors from the match columns.
pub fn write_match_against(
    f: &mut SqlFormatter<'_>,
    expr: &MatchAgainstExpr,
) -> Result<()> {
    f.write("MATCH (");
    f.write_expression_list(&expr.match_columns)?;
    f.remove_last_blank();
    f.write(") AGAINST (");
    f.push_parameter(ArgumentExpr::new(
        expr.search_string.clone(),
        SqlType::Varchar(None),
    ));
    if let Some(modifier) = expr.search_modifier {
        f.write_keyword(modifier.as_str());
    }
    f.remove_last_blank();
    f.write(") ");
    Ok(())
}

/// `LIMIT ?, ?`, binding offset then limit.
pub fn write_limit(f: &mut SqlFormatter<'_>, query: &QueryExpr) {
    let (offset, limit) = pagination_arguments(query);
    f.write_keyword("LIMIT");
    f.push_parameter(offset);
    f.remove_last_blank();
    f.write(", ");
    f.push_parameter(limit);
}
