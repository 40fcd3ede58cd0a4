//! # oxide-expr-mysql
//!
//! MySQL-specific extensions for `oxide-expr-core`.
//!
//! # How MySQL differs from other dialects
//!
//! - **[Upsert]**: `INSERT ... ON DUPLICATE KEY UPDATE ...` instead of
//!   `ON CONFLICT`. The conflict target is implied by the table's unique
//!   keys. See [`insert_or_update`].
//! - **Multi-row insert**: one `INSERT` with several value tuples. See
//!   [`bulk_insert`].
//! - **[Full-text search]**: `MATCH (cols) AGAINST (? [modifier])`. See
//!   [`match_against`] and [`SearchModifier`].
//! - **[Natural join]**: `NATURAL JOIN`, with no `ON` clause. See
//!   [`natural_join`].
//! - **Pagination**: `LIMIT offset, count` rather than `OFFSET ... LIMIT ...`.
//! - **Identifier quoting**: backticks (`` ` ``).
//!
//! [Upsert]: https://dev.mysql.com/doc/refman/8.0/en/insert-on-duplicate.html
//! [Full-text search]: https://dev.mysql.com/doc/refman/8.0/en/fulltext-search.html
//! [Natural join]: https://dev.mysql.com/doc/refman/8.0/en/join.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_expr_core::expr::{ColumnAssignmentExpr, ColumnExpr, ScalarExpr, TableExpr};
//! use oxide_expr_core::{Dialect, FormatOptions, SqlType};
//! use oxide_expr_mysql::{insert_or_update, MySqlDialect};
//!
//! let id = ColumnExpr::new("id", SqlType::Int);
//! let name = ColumnExpr::new("name", SqlType::Varchar(None));
//! let expr = insert_or_update(
//!     TableExpr::new("users"),
//!     vec![
//!         ColumnAssignmentExpr::new(id, ScalarExpr::argument(1, SqlType::Int)),
//!         ColumnAssignmentExpr::new(name.clone(), ScalarExpr::argument("Alice", SqlType::Varchar(None))),
//!     ],
//!     vec![ColumnAssignmentExpr::new(name, ScalarExpr::argument("Alice", SqlType::Varchar(None)))],
//! );
//!
//! let out = MySqlDialect.format(&expr, FormatOptions::default()).unwrap();
//! assert_eq!(
//!     out.sql,
//!     "INSERT INTO `users` (`id`, `name`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `name` = ?"
//! );
//! assert_eq!(out.parameters.len(), 3);
//! ```

mod dialect;
pub mod expr;
pub mod format;
pub mod visit;

pub use dialect::MySqlDialect;
pub use expr::{
    bulk_insert, insert_or_update, match_against, natural_join, BulkInsertExpr,
    InsertOrUpdateExpr, MatchAgainstExpr, NaturalJoinExpr, SearchModifier,
};
pub use visit::MySqlExprVisitor;
