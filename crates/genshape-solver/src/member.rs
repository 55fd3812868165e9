//! Hierarchy-aware member type resolution.
//!
//! Given a concrete shape such as `ArrayList<String>` and a member declared
//! somewhere above it, such as `List<E>.get(int): E`, the member resolver
//! finds the instantiation of the declaring type as seen from the shape
//! (`List<String>`) and resolves the member's type expressions against that
//! instantiation's binding (`String`).
//!
//! Walk order is fixed: the shape itself, then its supertype (recursively),
//! then each interface in declaration order (recursively). The first level
//! that matches wins.
//!
//! A raw use of a generic type erases its supertypes: the supertypes of raw
//! `ArrayList` are raw `AbstractList` and raw `List`.

use crate::binding::ParameterBinding;
use crate::error::{Result, ShapeError};
use crate::hierarchy_guard::{HierarchyGuard, HierarchyLimits};
use crate::resolve::Resolver;
use crate::shape::Shape;
use genshape_common::{MemberRef, MemberSignature, Name, NominalId, TypeExpr};
use tracing::{debug, trace};

// =============================================================================
// ResolvedMember
// =============================================================================

/// A member's type expressions resolved for one concrete instantiation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedMember {
    Field {
        name: Name,
        ty: Shape,
    },
    Callable {
        name: Name,
        return_type: Shape,
        /// Parameter shapes in declaration order
        params: Vec<Shape>,
        /// Declared exception shapes in declaration order
        exceptions: Vec<Shape>,
    },
}

impl ResolvedMember {
    pub fn name(&self) -> &Name {
        match self {
            Self::Field { name, .. } | Self::Callable { name, .. } => name,
        }
    }

    /// The field type, or the return type of a callable.
    pub fn value_type(&self) -> &Shape {
        match self {
            Self::Field { ty, .. } => ty,
            Self::Callable { return_type, .. } => return_type,
        }
    }

    pub fn into_value_type(self) -> Shape {
        match self {
            Self::Field { ty, .. } => ty,
            Self::Callable { return_type, .. } => return_type,
        }
    }
}

// =============================================================================
// MemberResolver
// =============================================================================

/// Resolves member types along a shape's inheritance graph.
pub struct MemberResolver<'a> {
    resolver: &'a Resolver,
    limits: HierarchyLimits,
}

impl<'a> MemberResolver<'a> {
    pub fn new(resolver: &'a Resolver) -> Self {
        Self {
            resolver,
            limits: HierarchyLimits::default(),
        }
    }

    /// Builder: override the walk limits.
    pub fn with_limits(mut self, limits: HierarchyLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The type of `member` as seen from `shape`: the field type, or the
    /// return type of a callable.
    pub fn member_type_of(&self, shape: &Shape, member: &MemberRef) -> Result<Shape> {
        self.member_signature_of(shape, member)
            .map(ResolvedMember::into_value_type)
    }

    /// Every type expression of `member`, resolved as seen from `shape`.
    ///
    /// Fails with [`ShapeError::MemberNotInHierarchy`] when the declaring type
    /// is not reachable from `shape`.
    pub fn member_signature_of(&self, shape: &Shape, member: &MemberRef) -> Result<ResolvedMember> {
        let declaring = self
            .as_supertype(shape, member.declaring)?
            .ok_or_else(|| ShapeError::MemberNotInHierarchy {
                member: member.name.clone(),
                shape: shape.to_string(),
            })?;
        self.resolve_member(&declaring, member)
    }

    /// Look a member up by name along the walk order and resolve it.
    ///
    /// The nearest declaration wins, so an override on a class hides the
    /// declaration on its supertype.
    pub fn find_member(&self, shape: &Shape, name: &str) -> Result<ResolvedMember> {
        let db = self.resolver.type_info();
        let found = self.walk(shape, &mut |level: &Shape| -> Result<Option<(Shape, MemberRef)>> {
            Ok(db.member(level.raw(), name).map(|member| (level.clone(), member)))
        })?;
        match found {
            Some((declaring, member)) => self.resolve_member(&declaring, &member),
            None => Err(ShapeError::MemberNotInHierarchy {
                member: Name::from(name),
                shape: shape.to_string(),
            }),
        }
    }

    /// The instantiation of `target` as seen from `shape`, if `target` is
    /// `shape`'s own type or one of its supertypes or interfaces.
    pub fn as_supertype(&self, shape: &Shape, target: NominalId) -> Result<Option<Shape>> {
        self.walk(shape, &mut |level: &Shape| -> Result<Option<Shape>> {
            Ok((level.raw() == target).then(|| level.clone()))
        })
    }

    /// The direct supertype of `shape`, instantiated through its binding.
    pub fn supertype_of(&self, shape: &Shape) -> Result<Option<Shape>> {
        let binding = shape.binding()?;
        self.resolver
            .type_info()
            .supertype(shape.raw())
            .map(|expr| self.instantiate_supertype(shape, &binding, &expr))
            .transpose()
    }

    /// The direct interfaces of `shape`, instantiated through its binding, in
    /// declaration order.
    pub fn interfaces_of(&self, shape: &Shape) -> Result<Vec<Shape>> {
        let binding = shape.binding()?;
        self.resolver
            .type_info()
            .interfaces(shape.raw())
            .iter()
            .map(|expr| self.instantiate_supertype(shape, &binding, expr))
            .collect()
    }

    fn resolve_member(&self, declaring: &Shape, member: &MemberRef) -> Result<ResolvedMember> {
        let binding = declaring.binding()?;
        trace!(
            member = %member.name,
            declaring = %declaring,
            "MemberResolver::resolve_member"
        );
        let name = member.name.clone();
        match &member.signature {
            MemberSignature::Field(ty) => Ok(ResolvedMember::Field {
                name,
                ty: self.resolver.resolve(ty, &binding)?,
            }),
            MemberSignature::Callable {
                return_type,
                params,
                exceptions,
            } => Ok(ResolvedMember::Callable {
                name,
                return_type: self.resolver.resolve(return_type, &binding)?,
                params: self.resolver.resolve_all(params, &binding)?,
                exceptions: self.resolver.resolve_all(exceptions, &binding)?,
            }),
        }
    }

    fn instantiate_supertype(
        &self,
        shape: &Shape,
        binding: &ParameterBinding,
        expr: &TypeExpr,
    ) -> Result<Shape> {
        // Raw use of a generic type: clauses over its own formals erase to
        // their raw heads. Any other parameter reference stays unbound.
        if shape.is_raw() && expr.mentions_params() {
            let formals = shape.formal_parameters();
            if !formals.is_empty() && expr.mentions_only(formals) {
                if let Some(head) = expr.head() {
                    return self.resolver.descriptor_of(head);
                }
            }
        }
        self.resolver.resolve(expr, binding)
    }

    // -------------------------------------------------------------------------
    // Walk
    // -------------------------------------------------------------------------

    /// Visit `shape` and its supertypes in walk order until `visit` returns a
    /// value.
    fn walk<T>(
        &self,
        shape: &Shape,
        visit: &mut dyn FnMut(&Shape) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let mut guard = HierarchyGuard::new(self.limits);
        self.walk_level(shape, &mut guard, visit)
    }

    fn walk_level<T>(
        &self,
        shape: &Shape,
        guard: &mut HierarchyGuard,
        visit: &mut dyn FnMut(&Shape) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        let step = guard.step_into(shape.raw());
        if step.is_limit() {
            debug!(
                shape = %shape,
                depth = guard.depth(),
                visits = guard.visits(),
                "MemberResolver - hierarchy limits exceeded"
            );
            return Err(ShapeError::HierarchyTooDeep {
                depth: guard.depth(),
            });
        }
        if !step.is_entered() {
            debug!(
                shape = %shape,
                path = ?guard.path(),
                "MemberResolver - inheritance cycle, pruning branch"
            );
            return Ok(None);
        }

        let result = self.visit_level(shape, guard, visit);
        guard.step_out(shape.raw());
        result
    }

    fn visit_level<T>(
        &self,
        shape: &Shape,
        guard: &mut HierarchyGuard,
        visit: &mut dyn FnMut(&Shape) -> Result<Option<T>>,
    ) -> Result<Option<T>> {
        if let Some(found) = visit(shape)? {
            return Ok(Some(found));
        }

        let db = self.resolver.type_info();
        let binding = shape.binding()?;

        if let Some(expr) = db.supertype(shape.raw()) {
            let supertype = self.instantiate_supertype(shape, &binding, &expr)?;
            trace!(shape = %shape, supertype = %supertype, "MemberResolver - supertype");
            if let Some(found) = self.walk_level(&supertype, guard, visit)? {
                return Ok(Some(found));
            }
        }

        for expr in db.interfaces(shape.raw()) {
            let interface = self.instantiate_supertype(shape, &binding, &expr)?;
            trace!(shape = %shape, interface = %interface, "MemberResolver - interface");
            if let Some(found) = self.walk_level(&interface, guard, visit)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
#[path = "../tests/member_tests.rs"]
mod tests;
