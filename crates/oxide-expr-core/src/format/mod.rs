//! SQL text generation.
//!
//! [`SqlFormatter`] is an [`ExprVisitor`] that writes SQL text while it walks
//! the tree and collects every bound argument in the order its `?`
//! placeholder appears. Base node kinds are rendered here; extension nodes
//! and the pagination clause are delegated to the [`Dialect`].
//!
//! Every token is written followed by a single blank. Writers that close a
//! group (`,` or `)`) first call [`SqlFormatter::remove_last_blank`].
//!
//! ```rust
//! use oxide_expr_core::dialect::{Dialect, GenericDialect};
//! use oxide_expr_core::expr::{QuerySource, ScalarExpr, SelectExpr};
//! use oxide_expr_core::format::FormatOptions;
//! use oxide_expr_core::types::SqlType;
//!
//! let age = ScalarExpr::column("age", SqlType::Int);
//! let expr = SelectExpr::new(QuerySource::table("users"))
//!     .where_clause(age.gt(ScalarExpr::argument(18, SqlType::Int)))
//!     .into_expr();
//!
//! let out = GenericDialect.format(&expr, FormatOptions::default()).unwrap();
//! assert_eq!(out.sql, r#"SELECT * FROM "users" WHERE "age" > ?"#);
//! assert_eq!(out.parameters.len(), 1);
//! ```

mod options;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

pub use options::{FormatOptions, MAX_INDENT_SIZE};

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::expr::{
    AggregateExpr, ArgumentExpr, BetweenExpr, BinaryExpr, CastingExpr, ColumnAssignmentExpr,
    ColumnDeclaringExpr, ColumnExpr, DeleteExpr, ExistsExpr, ExtensionExpr, FunctionExpr,
    InListExpr, InListItems, InsertExpr, InsertFromQueryExpr, JoinExpr, OrderByExpr, OrderType,
    QueryExpr, QuerySource, SameNode, ScalarExpr, SelectExpr, SqlExpr, SubqueryExpr, TableExpr,
    UnaryExpr, UnionExpr, UpdateExpr,
};
use crate::visit::{walk_expr, walk_query_source, walk_scalar, ExprVisitor};

/// Direction of a line break relative to the current indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indentation {
    /// One level deeper.
    Inner,
    /// One level shallower.
    Outer,
    /// Unchanged.
    Same,
}

/// Rendered SQL text and its bound parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedSql {
    /// SQL text with `?` placeholders.
    pub sql: String,
    /// Arguments in placeholder order.
    pub parameters: Vec<ArgumentExpr>,
}

/// Renders an expression tree to SQL for one dialect.
///
/// A formatter is single use: [`SqlFormatter::format`] consumes it.
pub struct SqlFormatter<'d> {
    dialect: &'d dyn Dialect,
    options: FormatOptions,
    sql: String,
    parameters: Vec<ArgumentExpr>,
    depth: usize,
}

impl fmt::Debug for SqlFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlFormatter")
            .field("dialect", &self.dialect.name())
            .field("options", &self.options)
            .field("sql", &self.sql)
            .field("parameters", &self.parameters)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'d> SqlFormatter<'d> {
    /// Creates a formatter with an empty buffer.
    #[must_use]
    pub const fn new(dialect: &'d dyn Dialect, options: FormatOptions) -> Self {
        Self {
            dialect,
            options,
            sql: String::new(),
            parameters: Vec::new(),
            depth: 0,
        }
    }

    /// Renders `expr` and returns the trimmed text with its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedNode`] for extension nodes the dialect
    /// does not handle, [`Error::TreeModified`] if a dialect hook hands back
    /// a different node, or any validation error raised by the dialect.
    pub fn format(mut self, expr: &SqlExpr) -> Result<FormattedSql> {
        self.visit(expr)?;

        let sql = self.sql.trim().to_string();
        debug!(
            dialect = self.dialect.name(),
            kind = expr.kind(),
            sql_len = sql.len(),
            parameters = self.parameters.len(),
            "formatted expression"
        );

        Ok(FormattedSql {
            sql,
            parameters: self.parameters,
        })
    }

    /// The dialect this formatter renders for.
    #[must_use]
    pub const fn dialect(&self) -> &'d dyn Dialect {
        self.dialect
    }

    /// The layout options.
    #[must_use]
    pub const fn options(&self) -> FormatOptions {
        self.options
    }

    /// Text written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Parameters collected so far.
    #[must_use]
    pub fn parameters(&self) -> &[ArgumentExpr] {
        &self.parameters
    }

    /// Appends raw text.
    pub fn write(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    /// Appends a keyword followed by a blank.
    pub fn write_keyword(&mut self, keyword: &str) {
        self.sql.push_str(keyword);
        self.sql.push(' ');
    }

    /// Drops one trailing blank, if any.
    pub fn remove_last_blank(&mut self) {
        if self.sql.ends_with(' ') {
            self.sql.pop();
        }
    }

    /// Adjusts the indentation depth and, when beautifying, starts a new
    /// line at that depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndentUnderflow`] when moving outwards from depth 0.
    pub fn new_line(&mut self, indentation: Indentation) -> Result<()> {
        match indentation {
            Indentation::Inner => self.depth += 1,
            Indentation::Outer => {
                self.depth = self.depth.checked_sub(1).ok_or(Error::IndentUnderflow)?;
            }
            Indentation::Same => {}
        }

        if self.options.beautify {
            self.remove_last_blank();
            self.sql.push('\n');
            let width = self.options.indent_width(self.depth);
            self.sql.push_str(&" ".repeat(width));
        }

        Ok(())
    }

    /// Writes a `?` placeholder and records `argument` as its value.
    pub fn push_parameter(&mut self, argument: ArgumentExpr) {
        self.write("? ");
        self.parameters.push(argument);
    }

    /// Quotes an identifier for the current dialect.
    #[must_use]
    pub fn quoted(&self, identifier: &str) -> String {
        self.dialect.quote_identifier(identifier)
    }

    /// Writes a quoted identifier followed by a blank.
    pub fn write_identifier(&mut self, identifier: &str) {
        let quoted = self.quoted(identifier);
        self.write_keyword(&quoted);
    }

    /// Writes a table name with its catalog and schema, without the alias.
    pub fn write_table_name(&mut self, table: &TableExpr) {
        for qualifier in [&table.catalog, &table.schema].into_iter().flatten() {
            let quoted = self.quoted(qualifier);
            self.write(&quoted);
            self.write(".");
        }
        self.write_identifier(&table.name);
    }

    /// Writes `(a, b, ...)` from unqualified column names.
    pub fn write_column_names<'a>(&mut self, columns: impl IntoIterator<Item = &'a ColumnExpr>) {
        self.write("(");
        for (i, column) in columns.into_iter().enumerate() {
            if i > 0 {
                self.remove_last_blank();
                self.write(", ");
            }
            self.write_identifier(&column.name);
        }
        self.remove_last_blank();
        self.write(") ");
    }

    /// Writes one parenthesized value tuple: `(?, ?, ...)`.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the values.
    pub fn write_values<'a>(
        &mut self,
        values: impl IntoIterator<Item = &'a ScalarExpr>,
    ) -> Result<()> {
        self.write("(");
        self.write_expression_list(values)?;
        self.remove_last_blank();
        self.write(") ");
        Ok(())
    }

    /// Writes expressions separated by `, `.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the expressions.
    pub fn write_expression_list<'a>(
        &mut self,
        exprs: impl IntoIterator<Item = &'a ScalarExpr>,
    ) -> Result<()> {
        for (i, expr) in exprs.into_iter().enumerate() {
            if i > 0 {
                self.remove_last_blank();
                self.write(", ");
            }
            self.visit_scalar(expr)?;
        }
        Ok(())
    }

    /// Writes `a = ?, b = ?, ...` with unqualified column names.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the assigned values.
    pub fn write_column_assignments(
        &mut self,
        assignments: &[Arc<ColumnAssignmentExpr>],
    ) -> Result<()> {
        for (i, assignment) in assignments.iter().enumerate() {
            if i > 0 {
                self.remove_last_blank();
                self.write(", ");
            }
            self.write_identifier(&assignment.column.name);
            self.write("= ");
            self.visit_scalar(&assignment.expr)?;
        }
        Ok(())
    }

    /// Writes an operand, parenthesized unless it is a leaf or otherwise
    /// self-delimiting.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the operand.
    pub fn write_operand(&mut self, expr: &ScalarExpr) -> Result<()> {
        if expr.needs_brackets() {
            self.write("(");
            self.visit_scalar(expr)?;
            self.remove_last_blank();
            self.write(") ");
        } else {
            self.visit_scalar(expr)?;
        }
        Ok(())
    }

    /// Writes a parenthesized sub-query, indented one level.
    ///
    /// # Errors
    ///
    /// Propagates formatting errors from the query.
    pub fn write_subquery(&mut self, query: &QueryExpr) -> Result<()> {
        self.write("(");
        self.new_line(Indentation::Inner)?;
        self.visit_query(query)?;
        self.remove_last_blank();
        self.new_line(Indentation::Outer)?;
        self.write(") ");
        Ok(())
    }

    fn write_where(&mut self, condition: Option<&ScalarExpr>) -> Result<()> {
        if let Some(condition) = condition {
            self.new_line(Indentation::Same)?;
            self.write_keyword("WHERE");
            self.visit_scalar(condition)?;
        }
        Ok(())
    }

    fn write_order_by(&mut self, order_by: &[Arc<OrderByExpr>]) -> Result<()> {
        if order_by.is_empty() {
            return Ok(());
        }

        self.new_line(Indentation::Same)?;
        self.write_keyword("ORDER BY");
        for (i, entry) in order_by.iter().enumerate() {
            if i > 0 {
                self.remove_last_blank();
                self.write(", ");
            }
            self.visit_order_by(entry)?;
        }
        Ok(())
    }

    fn write_pagination(&mut self, query: &QueryExpr) -> Result<()> {
        if !query.is_paginated() {
            return Ok(());
        }

        self.new_line(Indentation::Same)?;
        let dialect = self.dialect;
        dialect.write_pagination(self, query)
    }

    fn ensure_same(&self, kind: &'static str, same: bool) -> Result<()> {
        if same {
            return Ok(());
        }

        warn!(
            dialect = self.dialect.name(),
            kind, "formatter returned a different node"
        );
        Err(Error::TreeModified { kind })
    }
}

impl ExprVisitor for SqlFormatter<'_> {
    fn visit(&mut self, expr: &SqlExpr) -> Result<SqlExpr> {
        let result = walk_expr(self, expr)?;
        self.ensure_same(expr.kind(), result.is_same(expr))?;
        Ok(result)
    }

    fn visit_scalar(&mut self, expr: &ScalarExpr) -> Result<ScalarExpr> {
        let result = walk_scalar(self, expr)?;
        self.ensure_same(expr.kind(), result.is_same(expr))?;
        Ok(result)
    }

    fn visit_query_source(&mut self, expr: &QuerySource) -> Result<QuerySource> {
        let result = walk_query_source(self, expr)?;
        self.ensure_same(expr.kind(), result.is_same(expr))?;
        Ok(result)
    }

    fn visit_select(&mut self, expr: &Arc<SelectExpr>) -> Result<Arc<SelectExpr>> {
        self.write_keyword("SELECT");
        if expr.distinct {
            self.write_keyword("DISTINCT");
        }

        if expr.columns.is_empty() {
            self.write("* ");
        } else {
            self.write_expression_list(&expr.columns)?;
        }

        self.new_line(Indentation::Same)?;
        self.write_keyword("FROM");
        self.visit_query_source(&expr.from)?;

        self.write_where(expr.where_clause.as_ref())?;

        if !expr.group_by.is_empty() {
            self.new_line(Indentation::Same)?;
            self.write_keyword("GROUP BY");
            self.write_expression_list(&expr.group_by)?;
        }

        if let Some(having) = &expr.having {
            self.new_line(Indentation::Same)?;
            self.write_keyword("HAVING");
            self.visit_scalar(having)?;
        }

        self.write_order_by(&expr.order_by)?;
        self.write_pagination(&QueryExpr::Select(Arc::clone(expr)))?;

        Ok(Arc::clone(expr))
    }

    fn visit_union(&mut self, expr: &Arc<UnionExpr>) -> Result<Arc<UnionExpr>> {
        self.write_subquery(&expr.left)?;
        self.new_line(Indentation::Same)?;
        self.write_keyword(if expr.is_union_all { "UNION ALL" } else { "UNION" });
        self.new_line(Indentation::Same)?;
        self.write_subquery(&expr.right)?;

        self.write_order_by(&expr.order_by)?;
        self.write_pagination(&QueryExpr::Union(Arc::clone(expr)))?;

        Ok(Arc::clone(expr))
    }

    fn visit_insert(&mut self, expr: &Arc<InsertExpr>) -> Result<Arc<InsertExpr>> {
        self.write_keyword("INSERT INTO");
        self.write_table_name(&expr.table);
        self.write_column_names(expr.assignments.iter().map(|a| a.column.as_ref()));
        self.write_keyword("VALUES");
        self.write_values(expr.assignments.iter().map(|a| &a.expr))?;
        Ok(Arc::clone(expr))
    }

    fn visit_insert_from_query(
        &mut self,
        expr: &Arc<InsertFromQueryExpr>,
    ) -> Result<Arc<InsertFromQueryExpr>> {
        self.write_keyword("INSERT INTO");
        self.write_table_name(&expr.table);
        self.write_column_names(expr.columns.iter().map(Arc::as_ref));
        self.new_line(Indentation::Same)?;
        self.visit_query(&expr.query)?;
        Ok(Arc::clone(expr))
    }

    fn visit_update(&mut self, expr: &Arc<UpdateExpr>) -> Result<Arc<UpdateExpr>> {
        self.write_keyword("UPDATE");
        self.write_table_name(&expr.table);
        self.write_keyword("SET");
        self.write_column_assignments(&expr.assignments)?;
        self.write_where(expr.where_clause.as_ref())?;
        Ok(Arc::clone(expr))
    }

    fn visit_delete(&mut self, expr: &Arc<DeleteExpr>) -> Result<Arc<DeleteExpr>> {
        self.write_keyword("DELETE FROM");
        self.write_table_name(&expr.table);
        self.write_where(expr.where_clause.as_ref())?;
        Ok(Arc::clone(expr))
    }

    fn visit_table(&mut self, expr: &Arc<TableExpr>) -> Result<Arc<TableExpr>> {
        self.write_table_name(expr);
        if let Some(alias) = &expr.alias {
            self.write_identifier(alias);
        }
        Ok(Arc::clone(expr))
    }

    fn visit_join(&mut self, expr: &Arc<JoinExpr>) -> Result<Arc<JoinExpr>> {
        self.visit_query_source(&expr.left)?;
        self.new_line(Indentation::Same)?;
        self.write_keyword(expr.join_type.as_str());
        self.visit_query_source(&expr.right)?;
        if let Some(condition) = &expr.condition {
            self.write_keyword("ON");
            self.visit_scalar(condition)?;
        }
        Ok(Arc::clone(expr))
    }

    fn visit_subquery(&mut self, expr: &Arc<SubqueryExpr>) -> Result<Arc<SubqueryExpr>> {
        self.write_subquery(&expr.query)?;
        if let Some(alias) = &expr.alias {
            self.write_identifier(alias);
        }
        Ok(Arc::clone(expr))
    }

    fn visit_column(&mut self, expr: &Arc<ColumnExpr>) -> Result<Arc<ColumnExpr>> {
        if let Some(table) = &expr.table {
            let quoted = self.quoted(table);
            self.write(&quoted);
            self.write(".");
        }
        self.write_identifier(&expr.name);
        Ok(Arc::clone(expr))
    }

    fn visit_column_declaring(
        &mut self,
        expr: &Arc<ColumnDeclaringExpr>,
    ) -> Result<Arc<ColumnDeclaringExpr>> {
        self.visit_scalar(&expr.expr)?;
        if let Some(name) = &expr.declared_name {
            self.write_keyword("AS");
            self.write_identifier(name);
        }
        Ok(Arc::clone(expr))
    }

    fn visit_argument(&mut self, expr: &Arc<ArgumentExpr>) -> Result<Arc<ArgumentExpr>> {
        self.push_parameter(ArgumentExpr::clone(expr));
        Ok(Arc::clone(expr))
    }

    fn visit_binary(&mut self, expr: &Arc<BinaryExpr>) -> Result<Arc<BinaryExpr>> {
        self.write_operand(&expr.left)?;
        self.write_keyword(expr.op.as_str());
        self.write_operand(&expr.right)?;
        Ok(Arc::clone(expr))
    }

    fn visit_unary(&mut self, expr: &Arc<UnaryExpr>) -> Result<Arc<UnaryExpr>> {
        if expr.op.is_postfix() {
            self.write_operand(&expr.operand)?;
            self.write_keyword(expr.op.as_str());
        } else {
            self.write_keyword(expr.op.as_str());
            self.write_operand(&expr.operand)?;
        }
        Ok(Arc::clone(expr))
    }

    fn visit_between(&mut self, expr: &Arc<BetweenExpr>) -> Result<Arc<BetweenExpr>> {
        self.write_operand(&expr.expr)?;
        if expr.not_between {
            self.write_keyword("NOT");
        }
        self.write_keyword("BETWEEN");
        self.write_operand(&expr.lower)?;
        self.write_keyword("AND");
        self.write_operand(&expr.upper)?;
        Ok(Arc::clone(expr))
    }

    fn visit_in_list(&mut self, expr: &Arc<InListExpr>) -> Result<Arc<InListExpr>> {
        self.write_operand(&expr.left)?;
        if expr.not_in {
            self.write_keyword("NOT");
        }
        self.write_keyword("IN");
        match &expr.items {
            InListItems::Values(values) => self.write_values(values)?,
            InListItems::Query(query) => self.write_subquery(query)?,
        }
        Ok(Arc::clone(expr))
    }

    fn visit_exists(&mut self, expr: &Arc<ExistsExpr>) -> Result<Arc<ExistsExpr>> {
        if expr.not_exists {
            self.write_keyword("NOT");
        }
        self.write_keyword("EXISTS");
        self.write_subquery(&expr.query)?;
        Ok(Arc::clone(expr))
    }

    fn visit_aggregate(&mut self, expr: &Arc<AggregateExpr>) -> Result<Arc<AggregateExpr>> {
        self.write(expr.aggregate.as_str());
        self.write("(");
        if expr.distinct {
            self.write_keyword("DISTINCT");
        }
        match &expr.argument {
            Some(argument) => {
                self.visit_scalar(argument)?;
            }
            None => self.write("*"),
        }
        self.remove_last_blank();
        self.write(") ");
        Ok(Arc::clone(expr))
    }

    fn visit_function(&mut self, expr: &Arc<FunctionExpr>) -> Result<Arc<FunctionExpr>> {
        self.write(&expr.name);
        self.write("(");
        self.write_expression_list(&expr.args)?;
        self.remove_last_blank();
        self.write(") ");
        Ok(Arc::clone(expr))
    }

    fn visit_casting(&mut self, expr: &Arc<CastingExpr>) -> Result<Arc<CastingExpr>> {
        self.write("CAST(");
        self.visit_scalar(&expr.expr)?;
        self.write_keyword("AS");
        self.write(&expr.sql_type.type_name());
        self.write(") ");
        Ok(Arc::clone(expr))
    }

    fn visit_order_by(&mut self, expr: &Arc<OrderByExpr>) -> Result<Arc<OrderByExpr>> {
        self.visit_scalar(&expr.expr)?;
        if expr.order == OrderType::Descending {
            self.write_keyword("DESC");
        }
        Ok(Arc::clone(expr))
    }

    fn visit_extension(&mut self, expr: &ExtensionExpr) -> Result<ExtensionExpr> {
        let dialect = self.dialect;
        trace!(
            dialect = dialect.name(),
            kind = expr.kind(),
            "routing extension node to dialect"
        );
        dialect.format_extension(self, expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::expr::{AggregateType, JoinType};
    use crate::types::SqlType;

    fn render(expr: &SqlExpr) -> FormattedSql {
        GenericDialect.format(expr, FormatOptions::default()).unwrap()
    }

    #[test]
    fn test_primitives() {
        let mut f = SqlFormatter::new(&GenericDialect, FormatOptions::default());
        f.write_keyword("SELECT");
        f.write("* ");
        f.remove_last_blank();
        f.remove_last_blank();
        assert_eq!(f.sql(), "SELECT *");

        f.new_line(Indentation::Inner).unwrap();
        assert_eq!(f.sql(), "SELECT *");
        f.new_line(Indentation::Outer).unwrap();
        assert_eq!(f.new_line(Indentation::Outer), Err(Error::IndentUnderflow));
    }

    #[test]
    fn test_new_line_beautify() {
        let mut f = SqlFormatter::new(&GenericDialect, FormatOptions::pretty(4));
        f.write_keyword("SELECT");
        f.new_line(Indentation::Inner).unwrap();
        f.write_keyword("a");
        f.new_line(Indentation::Outer).unwrap();
        assert_eq!(f.sql(), "SELECT\n    a\n");
    }

    #[test]
    fn test_column_and_alias() {
        let expr = SqlExpr::Scalar(
            ScalarExpr::qualified_column("u", "name", SqlType::Text).alias("n"),
        );
        assert_eq!(render(&expr).sql, r#""u"."name" AS "n""#);
    }

    #[test]
    fn test_operand_brackets() {
        let a = ScalarExpr::column("a", SqlType::Int);
        let b = ScalarExpr::column("b", SqlType::Int);
        let expr = a
            .clone()
            .eq(ScalarExpr::argument(1, SqlType::Int))
            .or(b.is_null())
            .and(a.not_eq(ScalarExpr::argument(2, SqlType::Int)).not());

        let out = render(&SqlExpr::Scalar(expr));
        assert_eq!(
            out.sql,
            r#"(("a" = ?) OR ("b" IS NULL)) AND (NOT ("a" <> ?))"#
        );
        assert_eq!(out.parameters.len(), 2);
    }

    #[test]
    fn test_between_in_and_cast() {
        let x = ScalarExpr::column("x", SqlType::Int);
        let between = x.clone().not_between(
            ScalarExpr::argument(1, SqlType::Int),
            ScalarExpr::argument(9, SqlType::Int),
        );
        assert_eq!(render(&SqlExpr::Scalar(between)).sql, r#""x" NOT BETWEEN ? AND ?"#);

        let in_list = x.clone().in_list(vec![
            ScalarExpr::argument(1, SqlType::Int),
            ScalarExpr::argument(2, SqlType::Int),
        ]);
        assert_eq!(render(&SqlExpr::Scalar(in_list)).sql, r#""x" IN (?, ?)"#);

        let cast = x.cast(SqlType::Varchar(Some(10)));
        assert_eq!(render(&SqlExpr::Scalar(cast)).sql, r#"CAST("x" AS VARCHAR(10))"#);
    }

    #[test]
    fn test_functions_and_aggregates() {
        let count = ScalarExpr::aggregate(AggregateType::Count, None, false);
        assert_eq!(render(&SqlExpr::Scalar(count)).sql, "COUNT(*)");

        let distinct = ScalarExpr::aggregate(
            AggregateType::Count,
            Some(ScalarExpr::column("id", SqlType::Int)),
            true,
        );
        assert_eq!(render(&SqlExpr::Scalar(distinct)).sql, r#"COUNT(DISTINCT "id")"#);

        let now = ScalarExpr::function("now", vec![], SqlType::Timestamp);
        assert_eq!(render(&SqlExpr::Scalar(now)).sql, "now()");

        let lower = ScalarExpr::function(
            "lower",
            vec![ScalarExpr::column("name", SqlType::Text)],
            SqlType::Text,
        );
        assert_eq!(render(&SqlExpr::Scalar(lower)).sql, r#"lower("name")"#);
    }

    #[test]
    fn test_join_source() {
        let cond = ScalarExpr::qualified_column("u", "id", SqlType::Int)
            .eq(ScalarExpr::qualified_column("o", "user_id", SqlType::Int));
        let source = QuerySource::from(TableExpr::new("users").alias("u")).join(
            JoinType::Left,
            QuerySource::from(TableExpr::new("orders").alias("o")),
            Some(cond),
        );
        assert_eq!(
            render(&SqlExpr::Source(source)).sql,
            r#""users" "u" LEFT JOIN "orders" "o" ON "u"."id" = "o"."user_id""#
        );
    }

    #[test]
    fn test_schema_qualified_table() {
        let source = QuerySource::from(TableExpr::new("users").schema("app"));
        assert_eq!(render(&SqlExpr::Source(source)).sql, r#""app"."users""#);
    }
}
