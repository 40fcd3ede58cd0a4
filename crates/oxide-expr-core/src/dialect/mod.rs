//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. A [`Dialect`]
//! decides how identifiers are quoted, how pagination is written and how
//! its own extension node kinds are rendered. Base node kinds always render
//! the same way, whatever the dialect.

mod generic;

pub use generic::GenericDialect;

use crate::error::{Error, Result};
use crate::expr::{ArgumentExpr, ExtensionExpr, QueryExpr, SqlExpr};
use crate::format::{FormatOptions, FormattedSql, SqlFormatter};
use crate::types::SqlType;

/// Trait for SQL dialect-specific behavior.
///
/// The trait is object safe, so the dialect can be picked at runtime and
/// handed around as `&dyn Dialect` or `Box<dyn Dialect>`.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the identifier quote character: a double quote by default,
    /// a backtick for MySQL.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier, doubling any embedded quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        let escaped = name.replace(quote, &format!("{quote}{quote}"));
        format!("{quote}{escaped}{quote}")
    }

    /// Renders one of this dialect's extension nodes.
    ///
    /// Implementations downcast `expr` to their own node types, write the
    /// SQL through `f` and return `expr` itself. Anything else is rejected.
    ///
    /// # Errors
    ///
    /// The default implementation always returns [`Error::UnsupportedNode`].
    fn format_extension(
        &self,
        _f: &mut SqlFormatter<'_>,
        expr: &ExtensionExpr,
    ) -> Result<ExtensionExpr> {
        Err(Error::UnsupportedNode { kind: expr.kind() })
    }

    /// Writes the pagination clause of a query that has an offset, a limit
    /// or both.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the default never does.
    fn write_pagination(&self, f: &mut SqlFormatter<'_>, query: &QueryExpr) -> Result<()> {
        write_offset_limit(f, query);
        Ok(())
    }

    /// Renders `expr` with a fresh formatter.
    ///
    /// Not available on trait objects; use
    /// `SqlFormatter::new(dialect, options).format(expr)` there.
    ///
    /// # Errors
    ///
    /// See [`SqlFormatter::format`].
    fn format(&self, expr: &SqlExpr, options: FormatOptions) -> Result<FormattedSql>
    where
        Self: Sized,
    {
        SqlFormatter::new(self, options).format(expr)
    }
}

/// Offset bound when a query only sets a limit.
pub const DEFAULT_OFFSET: i64 = 0;

/// Limit bound when a query only sets an offset.
pub const DEFAULT_LIMIT: i64 = i64::MAX;

/// The (offset, limit) pair to bind, with unset sides defaulted.
#[must_use]
pub fn pagination_arguments(query: &QueryExpr) -> (ArgumentExpr, ArgumentExpr) {
    (
        ArgumentExpr::new(query.offset().unwrap_or(DEFAULT_OFFSET), SqlType::Long),
        ArgumentExpr::new(query.limit().unwrap_or(DEFAULT_LIMIT), SqlType::Long),
    )
}

/// Writes `OFFSET ? LIMIT ?`, binding offset then limit.
pub fn write_offset_limit(f: &mut SqlFormatter<'_>, query: &QueryExpr) {
    let (offset, limit) = pagination_arguments(query);
    f.write_keyword("OFFSET");
    f.push_parameter(offset);
    f.write_keyword("LIMIT");
    f.push_parameter(limit);
}
