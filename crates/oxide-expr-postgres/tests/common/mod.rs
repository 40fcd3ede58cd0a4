#![allow(dead_code)]

use std::sync::Arc;

use oxide_expr_core::expr::{ColumnAssignmentExpr, ColumnExpr, ScalarExpr};
use oxide_expr_core::{Dialect, Error, FormatOptions, FormattedSql, SqlExpr, SqlType, SqlValue};
use oxide_expr_postgres::PostgresDialect;

pub fn render(expr: &SqlExpr) -> FormattedSql {
    PostgresDialect
        .format(expr, FormatOptions::default())
        .unwrap_or_else(|e| panic!("Failed to format: {expr:?}\nError: {e}"))
}

pub fn render_err(expr: &SqlExpr) -> Error {
    PostgresDialect
        .format(expr, FormatOptions::default())
        .expect_err("Expected formatting to fail")
}

pub fn text_col(name: &str) -> ScalarExpr {
    ScalarExpr::column(name, SqlType::Text)
}

pub fn text_arg(value: &str) -> ScalarExpr {
    ScalarExpr::argument(value, SqlType::Varchar(None))
}

pub fn column(name: &str) -> ColumnExpr {
    ColumnExpr::new(name, SqlType::Long)
}

pub fn assign(name: &str, value: i64) -> Arc<ColumnAssignmentExpr> {
    ColumnAssignmentExpr::new(column(name), ScalarExpr::argument(value, SqlType::Long))
}

pub fn values(out: &FormattedSql) -> Vec<SqlValue> {
    out.parameters.iter().map(|p| p.value.clone()).collect()
}
