//! # oxide-expr-core
//!
//! Immutable SQL expression trees and a dialect-extensible SQL formatter.
//!
//! This crate provides:
//! - An `Arc`-backed expression tree for queries and DML statements
//! - A rewriting visitor that hands back the original nodes when nothing changed
//! - A formatter that renders a tree to SQL text plus ordered bound parameters
//! - A [`Dialect`](dialect::Dialect) trait through which database-specific
//!   crates add node kinds and override pagination
//!
//! ## Formatting
//!
//! ```rust
//! use oxide_expr_core::dialect::{Dialect, GenericDialect};
//! use oxide_expr_core::expr::{OrderByExpr, QuerySource, ScalarExpr, SelectExpr};
//! use oxide_expr_core::format::FormatOptions;
//! use oxide_expr_core::types::SqlType;
//!
//! let name = ScalarExpr::column("name", SqlType::Varchar(None));
//! let query = SelectExpr::new(QuerySource::table("users"))
//!     .columns(vec![name.clone()])
//!     .order_by(vec![OrderByExpr::asc(name)])
//!     .limit(10)
//!     .into_expr();
//!
//! let out = GenericDialect.format(&query, FormatOptions::default()).unwrap();
//! assert_eq!(
//!     out.sql,
//!     r#"SELECT "name" FROM "users" ORDER BY "name" OFFSET ? LIMIT ?"#
//! );
//! assert_eq!(out.parameters.len(), 2);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Argument values never reach the SQL text. Each one is written as a `?`
//! placeholder and returned in [`FormattedSql::parameters`](format::FormattedSql)
//! in placeholder order.

pub mod dialect;
pub mod error;
pub mod expr;
pub mod format;
pub mod types;
pub mod value;
pub mod visit;

pub use dialect::{Dialect, GenericDialect};
pub use error::{Error, Result};
pub use expr::{ExtensionExpr, ExtensionNode, SameNode, ScalarExpr, SqlExpr};
pub use format::{FormatOptions, FormattedSql, Indentation, SqlFormatter, MAX_INDENT_SIZE};
pub use types::SqlType;
pub use value::{SqlValue, ToSqlValue};
pub use visit::ExprVisitor;
