//! Type expression resolution.
//!
//! The [`Resolver`] turns a [`TypeExpr`] plus a [`ParameterBinding`] into a
//! [`Shape`]. Resolution is a pure recursive walk over the expression:
//!
//! | Expression | Result |
//! |------------|--------|
//! | `Nominal(T)` | `T` with no actuals, or `T[]` with its component for arrays |
//! | `Generic(T, args)` | `T` with each argument resolved in the same context |
//! | `Array(C)` | the array type over `C`'s raw type, with `C` as its one actual |
//! | `Param(N)` | the shape bound to `N`, unchanged |
//!
//! Arrays get the same shape whichever way they are reached: `String[]` named
//! directly and `T[]` with `T = String` both resolve to `Shape(String[], [String])`.

use crate::binding::ParameterBinding;
use crate::cache::ShapeCache;
use crate::error::{Result, ShapeError};
use crate::shape::Shape;
use genshape_common::{NominalId, SharedTypeInfo, TypeExpr};
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves type expressions against a metadata adapter.
pub struct Resolver {
    db: SharedTypeInfo,
    /// Shapes of bare nominal references; they never depend on the binding.
    nominals: ShapeCache<NominalId, Shape>,
}

impl Resolver {
    pub fn new(db: SharedTypeInfo) -> Self {
        Self {
            db,
            nominals: ShapeCache::new(),
        }
    }

    /// The metadata adapter this resolver reads from.
    pub fn type_info(&self) -> &SharedTypeInfo {
        &self.db
    }

    /// Resolve `expr` in the context `ctx`.
    pub fn resolve(&self, expr: &TypeExpr, ctx: &ParameterBinding) -> Result<Shape> {
        trace!(kind = expr.kind_name(), bound = ctx.len(), "Resolver::resolve");
        match expr {
            TypeExpr::Nominal(id) => self.descriptor_of(*id),
            TypeExpr::Generic { raw, args } => {
                let actual = self.resolve_all(args, ctx)?;
                self.shape(*raw, actual)
            }
            TypeExpr::Array(component) => {
                let component = self.resolve(component, ctx)?;
                Ok(self.array_of(component))
            }
            // Substitution replaces the reference; it never wraps the bound shape.
            TypeExpr::Param(name) => {
                ctx.get(name)
                    .cloned()
                    .ok_or_else(|| ShapeError::UnboundParameter { name: name.clone() })
            }
            other => {
                debug!(kind = other.kind_name(), "Resolver::resolve - unsupported expression");
                Err(ShapeError::UnsupportedExpression {
                    kind: other.kind_name(),
                })
            }
        }
    }

    /// Resolve each expression independently, preserving order.
    pub fn resolve_all(&self, exprs: &[TypeExpr], ctx: &ParameterBinding) -> Result<Vec<Shape>> {
        exprs.iter().map(|expr| self.resolve(expr, ctx)).collect()
    }

    /// The shape of a bare reference to `id`.
    ///
    /// Non-array types get no actual parameters. Array types get their
    /// component's shape as their single actual parameter.
    pub fn descriptor_of(&self, id: NominalId) -> Result<Shape> {
        if let Some(cached) = self.nominals.get(&id) {
            return Ok(cached);
        }
        self.ensure_known(id)?;

        // Built outside the cache entry: the component recursion re-enters
        // `nominals`. Racing builders publish whichever lands first.
        let shape = match self.db.array_component(id) {
            Some(component) => {
                let element = self.descriptor_of(component)?;
                Shape::from_parts(Arc::clone(&self.db), id, vec![element])
            }
            None => Shape::from_parts(Arc::clone(&self.db), id, Vec::new()),
        };
        Ok(self.nominals.get_or_insert_with(id, || shape))
    }

    /// Build the shape `raw<actual...>` from already resolved parameters.
    ///
    /// `actual` must be empty (raw use) or match the declared formal count.
    /// Array types are always built from their element: an empty `actual`
    /// gives the bare array descriptor, and a single element picks the array
    /// type over that element, whatever array `raw` named.
    pub fn shape(&self, raw: NominalId, mut actual: Vec<Shape>) -> Result<Shape> {
        self.ensure_known(raw)?;
        if self.db.array_component(raw).is_some() {
            return match actual.len() {
                0 => self.descriptor_of(raw),
                1 => Ok(self.array_of(actual.swap_remove(0))),
                n => Err(ShapeError::ArityMismatch {
                    shape: self.db.simple_name(raw),
                    expected: 1,
                    actual: n,
                }),
            };
        }
        if !actual.is_empty() {
            let expected = self.db.formal_parameters(raw).len();
            if expected != actual.len() {
                return Err(ShapeError::ArityMismatch {
                    shape: self.db.simple_name(raw),
                    expected,
                    actual: actual.len(),
                });
            }
        }
        Ok(Shape::from_parts(Arc::clone(&self.db), raw, actual))
    }

    /// The array shape whose element is `component`.
    pub fn array_of(&self, component: Shape) -> Shape {
        let raw = self.db.array_of(component.raw());
        Shape::from_parts(Arc::clone(&self.db), raw, vec![component])
    }

    /// Number of nominal shapes cached so far.
    pub fn cached_nominals(&self) -> usize {
        self.nominals.len()
    }

    fn ensure_known(&self, id: NominalId) -> Result<()> {
        if self.db.contains(id) {
            Ok(())
        } else {
            Err(ShapeError::UnknownNominal { id })
        }
    }
}

#[cfg(test)]
#[path = "../tests/resolve_tests.rs"]
mod tests;
