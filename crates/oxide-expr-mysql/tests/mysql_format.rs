//! Tests for MySQL rendering.

mod common;
use common::*;

use oxide_expr_core::expr::{QuerySource, SelectExpr, TableExpr};
use oxide_expr_core::{Dialect, Error, FormatOptions, SqlType, SqlValue};
use oxide_expr_mysql::{
    bulk_insert, insert_or_update, match_against, natural_join, MySqlDialect, SearchModifier,
};

// ===================================================================
// Base nodes
// ===================================================================

#[test]
fn identifiers_use_backticks() {
    let expr = SelectExpr::new(QuerySource::table("order"))
        .columns(vec![int_col("id")])
        .into_expr();
    assert_eq!(render(&expr).sql, "SELECT `id` FROM `order`");
}

#[test]
fn pagination_uses_limit_offset_pair() {
    let out = render(
        &SelectExpr::new(QuerySource::table("t"))
            .where_clause(int_col("id").gt(int_arg(3)))
            .offset(20)
            .limit(10)
            .into_expr(),
    );
    assert_eq!(out.sql, "SELECT * FROM `t` WHERE `id` > ? LIMIT ?, ?");
    assert_eq!(
        values(&out),
        vec![SqlValue::Int(3), SqlValue::Int(20), SqlValue::Int(10)]
    );
}

#[test]
fn pagination_defaults() {
    let out = render(&SelectExpr::new(QuerySource::table("t")).limit(5).into_expr());
    assert_eq!(out.sql, "SELECT * FROM `t` LIMIT ?, ?");
    assert_eq!(values(&out), vec![SqlValue::Int(0), SqlValue::Int(5)]);

    let out = render(&SelectExpr::new(QuerySource::table("t")).offset(5).into_expr());
    assert_eq!(values(&out), vec![SqlValue::Int(5), SqlValue::Int(i64::MAX)]);
}

#[test]
fn no_pagination_when_unset() {
    let out = render(&SelectExpr::new(QuerySource::table("t")).into_expr());
    assert_eq!(out.sql, "SELECT * FROM `t`");
    assert!(out.parameters.is_empty());
}

// ===================================================================
// Upsert
// ===================================================================

#[test]
fn upsert_with_updates() {
    let expr = insert_or_update(
        TableExpr::new("t"),
        vec![assign("id", 1), assign("hits", 1)],
        vec![assign("hits", 2)],
    );
    let out = render(&expr);
    assert_eq!(
        out.sql,
        "INSERT INTO `t` (`id`, `hits`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `hits` = ?"
    );
    assert_eq!(
        values(&out),
        vec![SqlValue::Int(1), SqlValue::Int(1), SqlValue::Int(2)]
    );
}

#[test]
fn upsert_without_updates_has_no_conflict_clause() {
    let expr = insert_or_update(TableExpr::new("t"), vec![assign("id", 1)], vec![]);
    let out = render(&expr);
    assert_eq!(out.sql, "INSERT INTO `t` (`id`) VALUES (?)");
    assert!(!out.sql.contains("DUPLICATE"));
}

// ===================================================================
// Bulk insert
// ===================================================================

#[test]
fn bulk_insert_derives_columns_from_first_row() {
    let rows = (0..3)
        .map(|i| vec![assign("a", i * 2), assign("b", i * 2 + 1)])
        .collect();
    let out = render(&bulk_insert(TableExpr::new("t"), rows));

    assert_eq!(
        out.sql,
        "INSERT INTO `t` (`a`, `b`) VALUES (?, ?), (?, ?), (?, ?)"
    );
    assert_eq!(out.sql.matches("(`a`, `b`)").count(), 1);
    assert_eq!(out.parameters.len(), 6);
    assert_eq!(values(&out), (0..6).map(SqlValue::Int).collect::<Vec<_>>());
}

#[test]
fn bulk_insert_single_row() {
    let out = render(&bulk_insert(TableExpr::new("t"), vec![vec![assign("a", 1)]]));
    assert_eq!(out.sql, "INSERT INTO `t` (`a`) VALUES (?)");
}

#[test]
fn bulk_insert_rejects_empty_rows() {
    let err = render_err(&bulk_insert(TableExpr::new("t"), vec![]));
    assert!(matches!(err, Error::MalformedBulkInsert(_)));
}

#[test]
fn bulk_insert_rejects_mismatched_rows() {
    let rows = vec![
        vec![assign("a", 1), assign("b", 2)],
        vec![assign("b", 3), assign("a", 4)],
    ];
    let err = render_err(&bulk_insert(TableExpr::new("t"), rows));
    assert!(matches!(err, Error::MalformedBulkInsert(msg) if msg.starts_with("row 1")));
}

// ===================================================================
// Natural join and full-text search
// ===================================================================

#[test]
fn natural_join_adds_no_parameters() {
    let source = natural_join(QuerySource::table("a"), QuerySource::table("b"));
    let out = render(&SelectExpr::new(source).into_expr());
    assert_eq!(out.sql, "SELECT * FROM `a` NATURAL JOIN `b`");
    assert!(out.parameters.is_empty());
}

#[test]
fn natural_join_beautified() {
    let source = natural_join(QuerySource::table("a"), QuerySource::table("b"));
    let out = MySqlDialect
        .format(&SelectExpr::new(source).into_expr(), FormatOptions::pretty(2))
        .unwrap();
    assert_eq!(out.sql, "SELECT *\nFROM `a`\nNATURAL JOIN `b`");
}

#[test]
fn match_against_without_modifier() {
    let predicate = match_against(vec![text_col("title"), text_col("body")], "rust", None);
    let out = render(
        &SelectExpr::new(QuerySource::table("posts"))
            .where_clause(predicate)
            .into_expr(),
    );
    assert_eq!(
        out.sql,
        "SELECT * FROM `posts` WHERE MATCH (`title`, `body`) AGAINST (?)"
    );
    assert_eq!(out.parameters.len(), 1);
    assert_eq!(out.parameters[0].sql_type, SqlType::Varchar(None));
    assert_eq!(values(&out), vec![SqlValue::Text(String::from("rust"))]);
}

#[test]
fn match_against_with_modifier() {
    let predicate = match_against(
        vec![text_col("title")],
        "+rust -java",
        Some(SearchModifier::BooleanMode),
    );
    let out = render(&oxide_expr_core::SqlExpr::Scalar(predicate));
    assert_eq!(out.sql, "MATCH (`title`) AGAINST (? IN BOOLEAN MODE)");
    assert_eq!(out.parameters.len(), 1);
}

#[test]
fn match_against_as_operand() {
    let predicate = match_against(vec![text_col("title")], "rust", None)
        .and(int_col("published").eq(int_arg(1)));
    let out = render(&oxide_expr_core::SqlExpr::Scalar(predicate));
    assert_eq!(
        out.sql,
        "(MATCH (`title`) AGAINST (?)) AND (`published` = ?)"
    );
    assert_aligned(&out);
}

#[test]
fn mysql_nodes_rejected_by_generic_dialect() {
    let expr = insert_or_update(TableExpr::new("t"), vec![assign("id", 1)], vec![]);
    let err = oxide_expr_core::GenericDialect
        .format(&expr, FormatOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedNode {
            kind: "insert_or_update"
        }
    );
}
