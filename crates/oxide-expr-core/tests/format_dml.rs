//! Tests for INSERT, UPDATE and DELETE rendering.

mod common;
use common::*;

use std::sync::Arc;

use oxide_expr_core::expr::{
    BinaryOperator, ColumnAssignmentExpr, ColumnExpr, DeleteExpr, InsertExpr,
    InsertFromQueryExpr, TableExpr, UpdateExpr,
};
use oxide_expr_core::{SqlType, SqlValue};

// ===================================================================
// INSERT
// ===================================================================

#[test]
fn insert_values() {
    let expr = InsertExpr::new(
        TableExpr::new("users"),
        vec![
            ColumnAssignmentExpr::new(
                ColumnExpr::new("name", SqlType::Varchar(None)),
                text_arg("bob"),
            ),
            ColumnAssignmentExpr::new(column("age"), int_arg(30)),
        ],
    )
    .into_expr();

    let out = render(&expr);
    assert_eq!(out.sql, r#"INSERT INTO "users" ("name", "age") VALUES (?, ?)"#);
    assert_eq!(
        values(&out),
        vec![SqlValue::Text(String::from("bob")), SqlValue::Int(30)]
    );
}

#[test]
fn insert_from_query() {
    let expr = InsertFromQueryExpr {
        table: Arc::new(TableExpr::new("archive")),
        columns: vec![Arc::new(column("id"))],
        query: users()
            .columns(vec![int_col("id")])
            .where_clause(int_col("age").lt(int_arg(10)))
            .into_query(),
    }
    .into_expr();

    let out = render(&expr);
    assert_eq!(
        out.sql,
        r#"INSERT INTO "archive" ("id") SELECT "id" FROM "users" WHERE "age" < ?"#
    );
    assert_aligned(&out);
}

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_with_where() {
    let expr = UpdateExpr::new(
        TableExpr::new("users"),
        vec![
            ColumnAssignmentExpr::new(
                ColumnExpr::new("name", SqlType::Varchar(None)),
                text_arg("bob"),
            ),
            ColumnAssignmentExpr::new(
                column("age"),
                int_col("age").binary(BinaryOperator::Plus, int_arg(1)),
            ),
        ],
        Some(int_col("id").eq(int_arg(7))),
    )
    .into_expr();

    let out = render(&expr);
    assert_eq!(
        out.sql,
        r#"UPDATE "users" SET "name" = ?, "age" = "age" + ? WHERE "id" = ?"#
    );
    assert_eq!(
        values(&out),
        vec![
            SqlValue::Text(String::from("bob")),
            SqlValue::Int(1),
            SqlValue::Int(7)
        ]
    );
}

#[test]
fn update_without_where() {
    let expr = UpdateExpr::new(
        TableExpr::new("users"),
        vec![ColumnAssignmentExpr::new(column("active"), int_arg(0))],
        None,
    )
    .into_expr();
    assert_eq!(render(&expr).sql, r#"UPDATE "users" SET "active" = ?"#);
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_with_where() {
    let expr = DeleteExpr::new(
        TableExpr::new("users"),
        Some(int_col("id").eq(int_arg(3))),
    )
    .into_expr();
    let out = render(&expr);
    assert_eq!(out.sql, r#"DELETE FROM "users" WHERE "id" = ?"#);
    assert_eq!(values(&out), vec![SqlValue::Int(3)]);
}

#[test]
fn delete_schema_qualified() {
    let expr = DeleteExpr::new(TableExpr::new("users").schema("app"), None).into_expr();
    assert_eq!(render(&expr).sql, r#"DELETE FROM "app"."users""#);
}

#[test]
fn beautified_update() {
    let expr = UpdateExpr::new(
        TableExpr::new("users"),
        vec![ColumnAssignmentExpr::new(column("age"), int_arg(1))],
        Some(int_col("id").eq(int_arg(2))),
    )
    .into_expr();
    assert_eq!(
        render_pretty(&expr, 2).sql,
        "UPDATE \"users\" SET \"age\" = ?\nWHERE \"id\" = ?"
    );
}
