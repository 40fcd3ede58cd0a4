//! MySQL dialect implementation.

use oxide_expr_core::expr::{ExtensionExpr, QueryExpr};
use oxide_expr_core::{Dialect, Error, Result, SqlFormatter};

use crate::expr::{BulkInsertExpr, InsertOrUpdateExpr, MatchAgainstExpr, NaturalJoinExpr};
use crate::format;

/// MySQL dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn format_extension(
        &self,
        f: &mut SqlFormatter<'_>,
        expr: &ExtensionExpr,
    ) -> Result<ExtensionExpr> {
        if let Some(node) = expr.downcast_ref::<InsertOrUpdateExpr>() {
            format::write_insert_or_update(f, node)?;
        } else if let Some(node) = expr.downcast_ref::<BulkInsertExpr>() {
            format::write_bulk_insert(f, node)?;
        } else if let Some(node) = expr.downcast_ref::<NaturalJoinExpr>() {
            format::write_natural_join(f, node)?;
        } else if let Some(node) = expr.downcast_ref::<MatchAgainstExpr>() {
            format::write_match_against(f, node)?;
        } else {
            return Err(Error::UnsupportedNode { kind: expr.kind() });
        }

        Ok(expr.clone())
    }

    fn write_pagination(&self, f: &mut SqlFormatter<'_>, query: &QueryExpr) -> Result<()> {
        format::write_limit(f, query);
        Ok(())
    }
}
