//! Dialect-defined node kinds.
//!
//! The base tree is a closed set of enums. A dialect adds vocabulary by
//! implementing [`ExtensionNode`] for its own node structs and wrapping them
//! in an [`ExtensionExpr`], which can sit at statement, scalar or query-source
//! position. Visitors and formatters downcast extension nodes back to the
//! concrete type they know about.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::types::SqlType;

use super::SameNode;

/// Upcasting support for [`ExtensionNode`] implementors.
///
/// Blanket-implemented for every `'static + Send + Sync` type; never
/// implement it by hand.
pub trait AsAny: Any + Send + Sync {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Converts an `Arc<Self>` into an `Arc<dyn Any>` sharing the allocation.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A node kind added to the tree language by a dialect.
pub trait ExtensionNode: AsAny + fmt::Debug {
    /// Short name of the node kind, used in error messages and logs.
    fn kind(&self) -> &'static str;

    /// The declared type when the node is used as a scalar expression.
    fn sql_type(&self) -> Option<SqlType> {
        None
    }
}

/// A shared handle to a dialect-defined node.
#[derive(Debug, Clone)]
pub struct ExtensionExpr {
    node: Arc<dyn ExtensionNode>,
}

impl ExtensionExpr {
    /// Wraps a new node.
    #[must_use]
    pub fn new<T: ExtensionNode>(node: T) -> Self {
        Self::from_arc(Arc::new(node))
    }

    /// Wraps an existing node, keeping its identity.
    #[must_use]
    pub fn from_arc<T: ExtensionNode>(node: Arc<T>) -> Self {
        Self { node }
    }

    /// Returns the node kind name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Returns the declared scalar type of the node, if it has one.
    #[must_use]
    pub fn sql_type(&self) -> Option<SqlType> {
        self.node.sql_type()
    }

    /// Returns `true` if the wrapped node is a `T`.
    #[must_use]
    pub fn is<T: ExtensionNode>(&self) -> bool {
        (*self.node).as_any().is::<T>()
    }

    /// Borrows the wrapped node as a `T`.
    #[must_use]
    pub fn downcast_ref<T: ExtensionNode>(&self) -> Option<&T> {
        (*self.node).as_any().downcast_ref::<T>()
    }

    /// Returns a shared handle to the wrapped node as a `T`.
    ///
    /// The returned `Arc` points at the same allocation, so wrapping it again
    /// with [`ExtensionExpr::from_arc`] yields a node that
    /// [`is_same`](SameNode::is_same) as this one.
    #[must_use]
    pub fn downcast<T: ExtensionNode>(&self) -> Option<Arc<T>> {
        AsAny::into_any(Arc::clone(&self.node)).downcast::<T>().ok()
    }
}

impl SameNode for ExtensionExpr {
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.node), Arc::as_ptr(&other.node))
    }
}
