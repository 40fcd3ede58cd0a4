//! Rendering of PostgreSQL nodes.

use oxide_expr_core::{Result, SqlFormatter};
use tracing::warn;

use crate::expr::{ILikeExpr, InsertOrUpdateExpr};

/// `left ILIKE right`, bracketing operands like a binary operator.
///
/// # Errors
///
/// Propagates formatting errors from either operand.
pub fn write_ilike(f: &mut SqlFormatter<'_>, expr: &ILikeExpr) -> Result<()> {
    f.write_operand(&expr.left)?;
    f.write_keyword("ILIKE");
    f.write_operand(&expr.right)?;
    Ok(())
}

/// `INSERT INTO t (cols) VALUES (row) [ON CONFLICT (keys) DO UPDATE SET ... | DO NOTHING]`.
///
/// # Errors
///
/// Returns [`oxide_expr_core::Error::MissingConflictTarget`] for update
/// assignments without conflict columns; otherwise propagates formatting
/// errors from the values.
pub fn write_insert_or_update(
    f: &mut SqlFormatter<'_>,
    expr: &InsertOrUpdateExpr,
) -> Result<()> {
    if let Err(e) = expr.validate() {
        warn!(table = %expr.table.name, error = %e, "rejecting upsert");
        return Err(e);
    }

    f.write_keyword("INSERT INTO");
    f.write_table_name(&expr.table);
    f.write_column_names(expr.assignments.iter().map(|a| a.column.as_ref()));
    f.write_keyword("VALUES");
    f.write_values(expr.assignments.iter().map(|a| &a.expr))?;

    if expr.conflict_columns.is_empty() {
        return Ok(());
    }

    f.write_keyword("ON CONFLICT");
    f.write_column_names(expr.conflict_columns.iter().map(AsRef::as_ref));
    if expr.update_assignments.is_empty() {
        f.write_keyword("DO NOTHING");
    } else {
        f.write_keyword("DO UPDATE SET");
        f.write_column_assignments(&expr.update_assignments)?;
    }

    Ok(())
}
