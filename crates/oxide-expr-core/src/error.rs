//! Error types for visiting and formatting expression trees.

/// Errors that can occur while rewriting or formatting an expression tree.
///
/// None of these are transient: formatting is deterministic, so the same
/// tree always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A formatter returned a different node than the one it was given.
    ///
    /// Formatting is a read-only pass; this always indicates a bug in a
    /// dialect implementation.
    #[error("formatter cannot modify the expression tree (returned a different {kind} node)")]
    TreeModified {
        /// Kind of the node whose identity changed.
        kind: &'static str,
    },

    /// Neither the dialect nor the base visitor knows how to handle a node.
    #[error("no formatting rule for node kind {kind}")]
    UnsupportedNode {
        /// Kind of the unhandled node.
        kind: &'static str,
    },

    /// A bulk insert with no rows, or with rows targeting different columns.
    #[error("malformed bulk insert: {0}")]
    MalformedBulkInsert(String),

    /// An upsert that updates on conflict without naming the conflict target.
    #[error("upsert into '{table}' has update assignments but no conflict columns")]
    MissingConflictTarget {
        /// The target table.
        table: String,
    },

    /// Unbalanced indentation changes while writing SQL.
    #[error("incorrect indent depth: outdented below zero")]
    IndentUnderflow,
}

/// Result type for visitor and formatter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::UnsupportedNode { kind: "natural_join" }.to_string(),
            "no formatting rule for node kind natural_join"
        );
        assert_eq!(
            Error::MalformedBulkInsert(String::from("no rows")).to_string(),
            "malformed bulk insert: no rows"
        );
    }
}
