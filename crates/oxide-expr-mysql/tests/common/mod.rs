#![allow(dead_code)]

use std::sync::Arc;

use oxide_expr_core::expr::{ColumnAssignmentExpr, ColumnExpr, ScalarExpr};
use oxide_expr_core::{Dialect, Error, FormatOptions, FormattedSql, SqlExpr, SqlType, SqlValue};
use oxide_expr_mysql::MySqlDialect;

pub fn render(expr: &SqlExpr) -> FormattedSql {
    MySqlDialect
        .format(expr, FormatOptions::default())
        .unwrap_or_else(|e| panic!("Failed to format: {expr:?}\nError: {e}"))
}

pub fn render_err(expr: &SqlExpr) -> Error {
    MySqlDialect
        .format(expr, FormatOptions::default())
        .expect_err("Expected formatting to fail")
}

pub fn int_col(name: &str) -> ScalarExpr {
    ScalarExpr::column(name, SqlType::Int)
}

pub fn text_col(name: &str) -> ScalarExpr {
    ScalarExpr::column(name, SqlType::Text)
}

pub fn int_arg(value: i64) -> ScalarExpr {
    ScalarExpr::argument(value, SqlType::Long)
}

pub fn assign(column: &str, value: i64) -> Arc<ColumnAssignmentExpr> {
    ColumnAssignmentExpr::new(ColumnExpr::new(column, SqlType::Long), int_arg(value))
}

pub fn values(out: &FormattedSql) -> Vec<SqlValue> {
    out.parameters.iter().map(|p| p.value.clone()).collect()
}

pub fn assert_aligned(out: &FormattedSql) {
    assert_eq!(
        out.sql.matches('?').count(),
        out.parameters.len(),
        "placeholder/parameter mismatch in: {}",
        out.sql
    );
}
