//! Scalar expression nodes.

use std::sync::Arc;

use crate::types::SqlType;
use crate::value::{SqlValue, ToSqlValue};

use super::extension::ExtensionExpr;
use super::query::QueryExpr;
use super::SameNode;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Plus,
    Minus,
    Times,
    Div,
    Rem,

    // String
    Like,
    NotLike,

    // Logical
    And,
    Or,
    Xor,

    // Comparison
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
}

impl BinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Equal => "=",
            Self::NotEqual => "<>",
        }
    }

    /// Returns `true` if the operator always yields a boolean.
    #[must_use]
    pub const fn is_predicate(&self) -> bool {
        !matches!(
            self,
            Self::Plus | Self::Minus | Self::Times | Self::Div | Self::Rem
        )
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `IS NULL` (postfix).
    IsNull,
    /// `IS NOT NULL` (postfix).
    IsNotNull,
    /// Negation (`-`).
    Minus,
    /// Unary plus (`+`).
    Plus,
    /// Logical `NOT`.
    Not,
}

impl UnaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "NOT",
        }
    }

    /// Returns `true` if the operator is written after its operand.
    #[must_use]
    pub const fn is_postfix(&self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateType {
    Min,
    Max,
    Avg,
    Sum,
    Count,
}

impl AggregateType {
    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Avg => "AVG",
            Self::Sum => "SUM",
            Self::Count => "COUNT",
        }
    }
}

/// A column reference, optionally qualified with a table alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnExpr {
    /// Table name or alias.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
    /// Declared type.
    pub sql_type: SqlType,
}

impl ColumnExpr {
    /// Creates an unqualified column.
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            table: None,
            name: name.into(),
            sql_type,
        }
    }

    /// Creates a column qualified with a table name or alias.
    #[must_use]
    pub fn qualified(table: impl Into<String>, name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
            sql_type,
        }
    }
}

/// An expression in a select list, with an optional declared name.
#[derive(Debug, Clone)]
pub struct ColumnDeclaringExpr {
    /// The selected expression.
    pub expr: ScalarExpr,
    /// Alias (`AS name`).
    pub declared_name: Option<String>,
}

/// A bound parameter: a value plus its declared SQL type.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentExpr {
    /// The bound value.
    pub value: SqlValue,
    /// Declared type of the value.
    pub sql_type: SqlType,
}

impl ArgumentExpr {
    /// Creates a new argument.
    #[must_use]
    pub fn new(value: impl ToSqlValue, sql_type: SqlType) -> Self {
        Self {
            value: value.to_sql_value(),
            sql_type,
        }
    }
}

/// A binary expression.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    /// Operator.
    pub op: BinaryOperator,
    /// Left operand.
    pub left: ScalarExpr,
    /// Right operand.
    pub right: ScalarExpr,
    /// Declared result type.
    pub sql_type: SqlType,
}

/// A unary expression.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    /// Operator.
    pub op: UnaryOperator,
    /// Operand.
    pub operand: ScalarExpr,
    /// Declared result type.
    pub sql_type: SqlType,
}

/// `expr [NOT] BETWEEN lower AND upper`.
#[derive(Debug, Clone)]
pub struct BetweenExpr {
    /// The tested expression.
    pub expr: ScalarExpr,
    /// Lower bound.
    pub lower: ScalarExpr,
    /// Upper bound.
    pub upper: ScalarExpr,
    /// Whether this is NOT BETWEEN.
    pub not_between: bool,
}

/// Right-hand side of an IN expression.
#[derive(Debug, Clone)]
pub enum InListItems {
    /// `IN (?, ?, ...)`
    Values(Vec<ScalarExpr>),
    /// `IN (SELECT ...)`
    Query(QueryExpr),
}

/// `left [NOT] IN (...)`.
#[derive(Debug, Clone)]
pub struct InListExpr {
    /// The tested expression.
    pub left: ScalarExpr,
    /// The candidate values or sub-query.
    pub items: InListItems,
    /// Whether this is NOT IN.
    pub not_in: bool,
}

/// `[NOT] EXISTS (sub-query)`.
#[derive(Debug, Clone)]
pub struct ExistsExpr {
    /// The sub-query.
    pub query: QueryExpr,
    /// Whether this is NOT EXISTS.
    pub not_exists: bool,
}

/// An aggregate function call such as `COUNT(DISTINCT x)`.
#[derive(Debug, Clone)]
pub struct AggregateExpr {
    /// The aggregate function.
    pub aggregate: AggregateType,
    /// Argument; `None` renders as `*`.
    pub argument: Option<ScalarExpr>,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// Declared result type.
    pub sql_type: SqlType,
}

/// A plain function call.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    /// Function name, written verbatim.
    pub name: String,
    /// Arguments.
    pub args: Vec<ScalarExpr>,
    /// Declared result type.
    pub sql_type: SqlType,
}

/// `CAST(expr AS type)`.
#[derive(Debug, Clone)]
pub struct CastingExpr {
    /// Expression to convert.
    pub expr: ScalarExpr,
    /// Target type.
    pub sql_type: SqlType,
}

/// A typed expression producing a single value.
#[derive(Debug, Clone)]
pub enum ScalarExpr {
    /// Column reference.
    Column(Arc<ColumnExpr>),
    /// Select-list entry with alias.
    ColumnDeclaring(Arc<ColumnDeclaringExpr>),
    /// Bound parameter.
    Argument(Arc<ArgumentExpr>),
    /// Binary expression.
    Binary(Arc<BinaryExpr>),
    /// Unary expression.
    Unary(Arc<UnaryExpr>),
    /// BETWEEN expression.
    Between(Arc<BetweenExpr>),
    /// IN expression.
    InList(Arc<InListExpr>),
    /// EXISTS expression.
    Exists(Arc<ExistsExpr>),
    /// Aggregate function.
    Aggregate(Arc<AggregateExpr>),
    /// Function call.
    Function(Arc<FunctionExpr>),
    /// CAST expression.
    Casting(Arc<CastingExpr>),
    /// Dialect-defined scalar.
    Extension(ExtensionExpr),
}

impl ScalarExpr {
    /// Creates a column reference.
    #[must_use]
    pub fn column(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self::Column(Arc::new(ColumnExpr::new(name, sql_type)))
    }

    /// Creates a column reference qualified with a table name or alias.
    #[must_use]
    pub fn qualified_column(
        table: impl Into<String>,
        name: impl Into<String>,
        sql_type: SqlType,
    ) -> Self {
        Self::Column(Arc::new(ColumnExpr::qualified(table, name, sql_type)))
    }

    /// Creates a bound parameter.
    #[must_use]
    pub fn argument(value: impl ToSqlValue, sql_type: SqlType) -> Self {
        Self::Argument(Arc::new(ArgumentExpr::new(value, sql_type)))
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>, sql_type: SqlType) -> Self {
        Self::Function(Arc::new(FunctionExpr {
            name: name.into(),
            args,
            sql_type,
        }))
    }

    /// Creates an aggregate call over `argument` (`None` for `*`).
    #[must_use]
    pub fn aggregate(aggregate: AggregateType, argument: Option<Self>, distinct: bool) -> Self {
        let sql_type = match (&aggregate, &argument) {
            (AggregateType::Count, _) | (_, None) => SqlType::Long,
            (AggregateType::Avg, _) => SqlType::Double,
            (_, Some(arg)) => arg.sql_type(),
        };
        Self::Aggregate(Arc::new(AggregateExpr {
            aggregate,
            argument,
            distinct,
            sql_type,
        }))
    }

    /// Creates `EXISTS (query)`.
    #[must_use]
    pub fn exists(query: QueryExpr) -> Self {
        Self::Exists(Arc::new(ExistsExpr {
            query,
            not_exists: false,
        }))
    }

    /// Creates `NOT EXISTS (query)`.
    #[must_use]
    pub fn not_exists(query: QueryExpr) -> Self {
        Self::Exists(Arc::new(ExistsExpr {
            query,
            not_exists: true,
        }))
    }

    /// Combines `self` and `right` with a binary operator.
    #[must_use]
    pub fn binary(self, op: BinaryOperator, right: Self) -> Self {
        let sql_type = if op.is_predicate() {
            SqlType::Boolean
        } else {
            self.sql_type()
        };
        Self::Binary(Arc::new(BinaryExpr {
            op,
            left: self,
            right,
            sql_type,
        }))
    }

    /// Creates an equality expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::Equal, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::NotEqual, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOperator::LessThan, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::LessThanOrEqual, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOperator::GreaterThan, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: Self) -> Self {
        self.binary(BinaryOperator::GreaterThanOrEqual, right)
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: Self) -> Self {
        self.binary(BinaryOperator::Like, pattern)
    }

    /// Creates a NOT LIKE expression.
    #[must_use]
    pub fn not_like(self, pattern: Self) -> Self {
        self.binary(BinaryOperator::NotLike, pattern)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOperator::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOperator::Or, right)
    }

    /// Applies a unary operator.
    #[must_use]
    pub fn unary(self, op: UnaryOperator) -> Self {
        let sql_type = match op {
            UnaryOperator::Minus | UnaryOperator::Plus => self.sql_type(),
            UnaryOperator::IsNull | UnaryOperator::IsNotNull | UnaryOperator::Not => {
                SqlType::Boolean
            }
        };
        Self::Unary(Arc::new(UnaryExpr {
            op,
            operand: self,
            sql_type,
        }))
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.unary(UnaryOperator::IsNull)
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.unary(UnaryOperator::IsNotNull)
    }

    /// Creates a NOT expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        self.unary(UnaryOperator::Not)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, lower: Self, upper: Self) -> Self {
        Self::Between(Arc::new(BetweenExpr {
            expr: self,
            lower,
            upper,
            not_between: false,
        }))
    }

    /// Creates a NOT BETWEEN expression.
    #[must_use]
    pub fn not_between(self, lower: Self, upper: Self) -> Self {
        Self::Between(Arc::new(BetweenExpr {
            expr: self,
            lower,
            upper,
            not_between: true,
        }))
    }

    /// Creates an IN expression over a value list.
    #[must_use]
    pub fn in_list(self, values: Vec<Self>) -> Self {
        Self::InList(Arc::new(InListExpr {
            left: self,
            items: InListItems::Values(values),
            not_in: false,
        }))
    }

    /// Creates a NOT IN expression over a value list.
    #[must_use]
    pub fn not_in_list(self, values: Vec<Self>) -> Self {
        Self::InList(Arc::new(InListExpr {
            left: self,
            items: InListItems::Values(values),
            not_in: true,
        }))
    }

    /// Creates an IN expression over a sub-query.
    #[must_use]
    pub fn in_query(self, query: QueryExpr) -> Self {
        Self::InList(Arc::new(InListExpr {
            left: self,
            items: InListItems::Query(query),
            not_in: false,
        }))
    }

    /// Creates a CAST expression.
    #[must_use]
    pub fn cast(self, sql_type: SqlType) -> Self {
        Self::Casting(Arc::new(CastingExpr {
            expr: self,
            sql_type,
        }))
    }

    /// Wraps the expression as a select-list entry named `alias`.
    #[must_use]
    pub fn alias(self, alias: impl Into<String>) -> Self {
        Self::ColumnDeclaring(Arc::new(ColumnDeclaringExpr {
            expr: self,
            declared_name: Some(alias.into()),
        }))
    }

    /// Returns the declared type of the expression.
    ///
    /// Extension nodes that do not declare a type report
    /// `SqlType::Custom` with their kind name.
    #[must_use]
    pub fn sql_type(&self) -> SqlType {
        match self {
            Self::Column(e) => e.sql_type.clone(),
            Self::ColumnDeclaring(e) => e.expr.sql_type(),
            Self::Argument(e) => e.sql_type.clone(),
            Self::Binary(e) => e.sql_type.clone(),
            Self::Unary(e) => e.sql_type.clone(),
            Self::Between(_) | Self::InList(_) | Self::Exists(_) => SqlType::Boolean,
            Self::Aggregate(e) => e.sql_type.clone(),
            Self::Function(e) => e.sql_type.clone(),
            Self::Casting(e) => e.sql_type.clone(),
            Self::Extension(e) => e
                .sql_type()
                .unwrap_or_else(|| SqlType::Custom(String::from(e.kind()))),
        }
    }

    /// Returns `true` for nodes without sub-expressions.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Column(_) | Self::Argument(_))
    }

    /// Returns `true` if the expression must be parenthesized when used as
    /// an operand.
    #[must_use]
    pub const fn needs_brackets(&self) -> bool {
        !(self.is_leaf()
            || matches!(
                self,
                Self::ColumnDeclaring(_)
                    | Self::Function(_)
                    | Self::Aggregate(_)
                    | Self::Exists(_)
                    | Self::Casting(_)
            ))
    }

    /// Short name of the node kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Column(_) => "column",
            Self::ColumnDeclaring(_) => "column_declaring",
            Self::Argument(_) => "argument",
            Self::Binary(_) => "binary",
            Self::Unary(_) => "unary",
            Self::Between(_) => "between",
            Self::InList(_) => "in_list",
            Self::Exists(_) => "exists",
            Self::Aggregate(_) => "aggregate",
            Self::Function(_) => "function",
            Self::Casting(_) => "casting",
            Self::Extension(e) => e.kind(),
        }
    }
}

impl SameNode for ScalarExpr {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Column(a), Self::Column(b)) => Arc::ptr_eq(a, b),
            (Self::ColumnDeclaring(a), Self::ColumnDeclaring(b)) => Arc::ptr_eq(a, b),
            (Self::Argument(a), Self::Argument(b)) => Arc::ptr_eq(a, b),
            (Self::Binary(a), Self::Binary(b)) => Arc::ptr_eq(a, b),
            (Self::Unary(a), Self::Unary(b)) => Arc::ptr_eq(a, b),
            (Self::Between(a), Self::Between(b)) => Arc::ptr_eq(a, b),
            (Self::InList(a), Self::InList(b)) => Arc::ptr_eq(a, b),
            (Self::Exists(a), Self::Exists(b)) => Arc::ptr_eq(a, b),
            (Self::Aggregate(a), Self::Aggregate(b)) => Arc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Casting(a), Self::Casting(b)) => Arc::ptr_eq(a, b),
            (Self::Extension(a), Self::Extension(b)) => a.is_same(b),
            _ => false,
        }
    }
}

impl From<ColumnExpr> for ScalarExpr {
    fn from(column: ColumnExpr) -> Self {
        Self::Column(Arc::new(column))
    }
}

impl From<Arc<ColumnExpr>> for ScalarExpr {
    fn from(column: Arc<ColumnExpr>) -> Self {
        Self::Column(column)
    }
}

impl From<ExtensionExpr> for ScalarExpr {
    fn from(expr: ExtensionExpr) -> Self {
        Self::Extension(expr)
    }
}
