//! PostgreSQL dialect implementation.

use oxide_expr_core::expr::ExtensionExpr;
use oxide_expr_core::{Dialect, Error, Result, SqlFormatter};

use crate::expr::{ILikeExpr, InsertOrUpdateExpr};
use crate::format;

/// PostgreSQL dialect.
///
/// Keeps the base `OFFSET ? LIMIT ?` pagination.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn format_extension(
        &self,
        f: &mut SqlFormatter<'_>,
        expr: &ExtensionExpr,
    ) -> Result<ExtensionExpr> {
        if let Some(node) = expr.downcast_ref::<ILikeExpr>() {
            format::write_ilike(f, node)?;
        } else if let Some(node) = expr.downcast_ref::<InsertOrUpdateExpr>() {
            format::write_insert_or_update(f, node)?;
        } else {
            return Err(Error::UnsupportedNode { kind: expr.kind() });
        }

        Ok(expr.clone())
    }
}
