#![allow(dead_code)]

use oxide_expr_core::expr::{ColumnExpr, ScalarExpr, SelectExpr, QuerySource};
use oxide_expr_core::{Dialect, FormatOptions, FormattedSql, GenericDialect, SqlExpr, SqlType, SqlValue};

pub fn render(expr: &SqlExpr) -> FormattedSql {
    GenericDialect
        .format(expr, FormatOptions::default())
        .unwrap_or_else(|e| panic!("Failed to format: {expr:?}\nError: {e}"))
}

pub fn render_pretty(expr: &SqlExpr, indent: usize) -> FormattedSql {
    GenericDialect
        .format(expr, FormatOptions::pretty(indent))
        .unwrap_or_else(|e| panic!("Failed to format: {expr:?}\nError: {e}"))
}

pub fn int_col(name: &str) -> ScalarExpr {
    ScalarExpr::column(name, SqlType::Int)
}

pub fn text_col(name: &str) -> ScalarExpr {
    ScalarExpr::column(name, SqlType::Varchar(None))
}

pub fn int_arg(value: i64) -> ScalarExpr {
    ScalarExpr::argument(value, SqlType::Long)
}

pub fn text_arg(value: &str) -> ScalarExpr {
    ScalarExpr::argument(value, SqlType::Varchar(None))
}

pub fn column(name: &str) -> ColumnExpr {
    ColumnExpr::new(name, SqlType::Int)
}

pub fn users() -> SelectExpr {
    SelectExpr::new(QuerySource::table("users"))
}

pub fn values(out: &FormattedSql) -> Vec<SqlValue> {
    out.parameters.iter().map(|p| p.value.clone()).collect()
}

/// Asserts that every `?` in the text has exactly one parameter.
pub fn assert_aligned(out: &FormattedSql) {
    let placeholders = out.sql.matches('?').count();
    assert_eq!(
        placeholders,
        out.parameters.len(),
        "placeholder/parameter mismatch in: {}",
        out.sql
    );
}
