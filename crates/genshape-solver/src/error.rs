//! Resolution errors.
//!
//! Every variant is terminal for the operation that produced it: resolution is
//! all-or-nothing and no partial shape is ever returned.

use genshape_common::{Name, NominalId};
use thiserror::Error;

/// Errors produced by shape resolution and member lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The adapter produced an expression kind the resolver cannot interpret.
    /// Indicates a version mismatch between adapter and engine.
    #[error("unsupported type expression kind `{kind}`")]
    UnsupportedExpression { kind: &'static str },

    /// A parameter reference escaped its binding context.
    #[error("type parameter `{name}` is not bound in the current context")]
    UnboundParameter { name: Name },

    /// Formal and actual lists of a binding have different lengths.
    #[error("binding has {formals} formal parameters but {actuals} actual parameters")]
    InvalidBinding { formals: usize, actuals: usize },

    /// The requested name is not a formal parameter of the shape's raw type.
    #[error("`{shape}` declares no formal parameter named `{name}`")]
    UnknownFormalParameter { name: Name, shape: String },

    /// The member is unreachable from the shape's inheritance graph.
    #[error("member `{member}` is not declared anywhere in the hierarchy of `{shape}`")]
    MemberNotInHierarchy { member: Name, shape: String },

    /// The adapter does not know this nominal identity.
    #[error("unknown nominal type {id}")]
    UnknownNominal { id: NominalId },

    /// An instantiation supplied the wrong number of actual parameters.
    #[error("`{shape}` declares {expected} type parameters but {actual} were supplied")]
    ArityMismatch {
        shape: Name,
        expected: usize,
        actual: usize,
    },

    /// A hierarchy walk exceeded its depth or visit budget.
    #[error("hierarchy walk exceeded its limits at depth {depth}")]
    HierarchyTooDeep { depth: u32 },
}

/// Result alias used throughout the solver.
pub type Result<T, E = ShapeError> = std::result::Result<T, E>;
