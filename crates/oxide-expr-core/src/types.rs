//! Declared SQL types of scalar expressions.

use core::fmt;

/// The declared SQL type of a scalar expression or bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    /// Boolean.
    Boolean,
    /// Integer (4 bytes).
    Int,
    /// Big integer (8 bytes).
    Long,
    /// Real (4-byte float).
    Float,
    /// Double precision (8-byte float).
    Double,
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,
    /// Binary large object.
    Blob,
    /// Date.
    Date,
    /// Time.
    Time,
    /// Timestamp.
    Timestamp,
    /// Database-specific type, rendered verbatim.
    Custom(String),
}

impl SqlType {
    /// Returns the type name as written in `CAST(... AS <name>)`.
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Self::Boolean => String::from("BOOLEAN"),
            Self::Int => String::from("INT"),
            Self::Long => String::from("BIGINT"),
            Self::Float => String::from("FLOAT"),
            Self::Double => String::from("DOUBLE"),
            Self::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => format!("DECIMAL({p}, {s})"),
                (Some(p), None) => format!("DECIMAL({p})"),
                _ => String::from("DECIMAL"),
            },
            Self::Varchar(len) => {
                len.map_or_else(|| String::from("VARCHAR"), |n| format!("VARCHAR({n})"))
            }
            Self::Text => String::from("TEXT"),
            Self::Blob => String::from("BLOB"),
            Self::Date => String::from("DATE"),
            Self::Time => String::from("TIME"),
            Self::Timestamp => String::from("TIMESTAMP"),
            Self::Custom(name) => name.clone(),
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
