//! Type expressions and member references supplied by the metadata adapter.

use crate::nominal::{Name, NominalId};

/// A type as written in a declaration: a supertype clause, a field type, a
/// callable signature.
///
/// The enum is `#[non_exhaustive]` so adapters can surface use-site forms the
/// engine does not interpret; the engine rejects those rather than guessing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TypeExpr {
    /// A bare reference to a nominal type: `String`, `List` (raw), `String[]`.
    Nominal(NominalId),
    /// A generic instantiation: `Map<K, List<V>>`.
    Generic { raw: NominalId, args: Vec<TypeExpr> },
    /// A generically constructed array: `T[]`, `List<T>[]`.
    Array(Box<TypeExpr>),
    /// A reference to a formal parameter in scope: `T`.
    Param(Name),
    /// A wildcard use-site (`?`, `? extends Bound`). Not interpreted by the
    /// resolver.
    Wildcard { upper: Option<Box<TypeExpr>> },
}

impl TypeExpr {
    /// Reference a formal parameter by name.
    pub fn param(name: &str) -> Self {
        Self::Param(Name::from(name))
    }

    /// Instantiate `raw` with `args`.
    pub fn generic(raw: NominalId, args: Vec<TypeExpr>) -> Self {
        Self::Generic { raw, args }
    }

    /// Array whose component is `component`.
    pub fn array(component: TypeExpr) -> Self {
        Self::Array(Box::new(component))
    }

    /// Short kind name for diagnostics and tracing.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nominal(_) => "nominal",
            Self::Generic { .. } => "generic",
            Self::Array(_) => "array",
            Self::Param(_) => "param",
            Self::Wildcard { .. } => "wildcard",
        }
    }

    /// The nominal type this expression is headed by, if any.
    ///
    /// `Map<K, V>` is headed by `Map`; parameters, arrays and wildcards have no
    /// nominal head.
    pub const fn head(&self) -> Option<NominalId> {
        match self {
            Self::Nominal(id) | Self::Generic { raw: id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Whether any formal parameter reference occurs in this expression.
    pub fn mentions_params(&self) -> bool {
        match self {
            Self::Nominal(_) => false,
            Self::Generic { args, .. } => args.iter().any(Self::mentions_params),
            Self::Array(component) => component.mentions_params(),
            Self::Param(_) => true,
            Self::Wildcard { upper } => upper.as_deref().is_some_and(Self::mentions_params),
        }
    }

    /// Whether every parameter reference in this expression names one of
    /// `formals`. True for expressions with no references at all.
    pub fn mentions_only(&self, formals: &[Name]) -> bool {
        match self {
            Self::Nominal(_) => true,
            Self::Generic { args, .. } => args.iter().all(|arg| arg.mentions_only(formals)),
            Self::Array(component) => component.mentions_only(formals),
            Self::Param(name) => formals.contains(name),
            Self::Wildcard { upper } => upper
                .as_deref()
                .is_none_or(|bound| bound.mentions_only(formals)),
        }
    }
}

impl From<NominalId> for TypeExpr {
    fn from(id: NominalId) -> Self {
        Self::Nominal(id)
    }
}

// =============================================================================
// Members
// =============================================================================

/// Type expressions making up a member declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberSignature {
    /// A field: one type expression.
    Field(TypeExpr),
    /// A method or constructor-like callable.
    Callable {
        return_type: TypeExpr,
        params: Vec<TypeExpr>,
        exceptions: Vec<TypeExpr>,
    },
}

/// A member as declared on one nominal type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberRef {
    /// The type that declares the member.
    pub declaring: NominalId,
    pub name: Name,
    pub signature: MemberSignature,
}

impl MemberRef {
    /// A field declared on `declaring`.
    pub fn field(declaring: NominalId, name: &str, ty: TypeExpr) -> Self {
        Self {
            declaring,
            name: Name::from(name),
            signature: MemberSignature::Field(ty),
        }
    }

    /// A callable declared on `declaring` with no declared exceptions.
    pub fn callable(
        declaring: NominalId,
        name: &str,
        return_type: TypeExpr,
        params: Vec<TypeExpr>,
    ) -> Self {
        Self {
            declaring,
            name: Name::from(name),
            signature: MemberSignature::Callable {
                return_type,
                params,
                exceptions: Vec::new(),
            },
        }
    }

    /// Set the declared exceptions of a callable. Fields are left unchanged.
    pub fn with_exceptions(mut self, declared: Vec<TypeExpr>) -> Self {
        if let MemberSignature::Callable { exceptions, .. } = &mut self.signature {
            *exceptions = declared;
        }
        self
    }

    pub const fn is_callable(&self) -> bool {
        matches!(self.signature, MemberSignature::Callable { .. })
    }
}

#[cfg(test)]
#[path = "../tests/expr_tests.rs"]
mod tests;
