//! # oxide-expr-postgres
//!
//! PostgreSQL-specific extensions for `oxide-expr-core`.
//!
//! # How PostgreSQL differs from other dialects
//!
//! - **[ILIKE]**: case-insensitive pattern matching. See [`ilike`] and
//!   [`ilike_pattern`].
//! - **[Upsert]**: `INSERT ... ON CONFLICT (cols) DO UPDATE SET ...` or
//!   `DO NOTHING`. Unlike MySQL, the conflict target is named explicitly.
//!   See [`insert_or_update`].
//! - **Identifier quoting**: double quotes (`"`).
//!
//! [ILIKE]: https://www.postgresql.org/docs/current/functions-matching.html
//! [Upsert]: https://www.postgresql.org/docs/current/sql-insert.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_expr_core::expr::{QuerySource, ScalarExpr, SelectExpr};
//! use oxide_expr_core::{Dialect, FormatOptions, SqlType};
//! use oxide_expr_postgres::{ilike_pattern, PostgresDialect};
//!
//! let name = ScalarExpr::column("name", SqlType::Text);
//! let expr = SelectExpr::new(QuerySource::table("users"))
//!     .where_clause(ilike_pattern(name, "%bob%"))
//!     .into_expr();
//!
//! let out = PostgresDialect.format(&expr, FormatOptions::default()).unwrap();
//! assert_eq!(out.sql, r#"SELECT * FROM "users" WHERE "name" ILIKE ?"#);
//! assert_eq!(out.parameters.len(), 1);
//! ```

mod dialect;
pub mod expr;
pub mod format;
pub mod visit;

pub use dialect::PostgresDialect;
pub use expr::{ilike, ilike_pattern, insert_or_update, ILikeExpr, InsertOrUpdateExpr};
pub use visit::PostgresExprVisitor;
