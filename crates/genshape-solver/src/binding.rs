//! Parameter bindings: the context an expression is resolved in.

use crate::error::{Result, ShapeError};
use crate::shape::Shape;
use genshape_common::Name;
use genshape_common::limits::BINDING_INLINE_CAPACITY;
use smallvec::SmallVec;

/// Ordered mapping from formal parameter names to resolved shapes.
///
/// Read-only after construction. Lookup is a linear scan; bindings are as
/// small as the parameter lists they come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterBinding {
    names: SmallVec<[Name; BINDING_INLINE_CAPACITY]>,
    shapes: SmallVec<[Shape; BINDING_INLINE_CAPACITY]>,
}

impl ParameterBinding {
    /// The binding of a non-generic context.
    pub const EMPTY: Self = Self {
        names: SmallVec::new_const(),
        shapes: SmallVec::new_const(),
    };

    /// Pair `names` with `shapes` positionally.
    ///
    /// Fails with [`ShapeError::InvalidBinding`] if the lists differ in length.
    pub fn new(
        names: impl IntoIterator<Item = Name>,
        shapes: impl IntoIterator<Item = Shape>,
    ) -> Result<Self> {
        let names: SmallVec<[Name; BINDING_INLINE_CAPACITY]> = names.into_iter().collect();
        let shapes: SmallVec<[Shape; BINDING_INLINE_CAPACITY]> = shapes.into_iter().collect();
        if names.len() != shapes.len() {
            return Err(ShapeError::InvalidBinding {
                formals: names.len(),
                actuals: shapes.len(),
            });
        }
        Ok(Self { names, shapes })
    }

    /// The binding a shape establishes for its own declaration: its formal
    /// parameters mapped to its actual parameters.
    ///
    /// A raw shape binds nothing, so expressions mentioning its parameters
    /// fail with `UnboundParameter` rather than resolving to a guess.
    pub fn for_shape(shape: &Shape) -> Result<Self> {
        if shape.is_raw() {
            return Ok(Self::EMPTY);
        }
        Self::new(
            shape.formal_parameters().iter().cloned(),
            shape.actual_parameters().iter().cloned(),
        )
    }

    /// The shape bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.names
            .iter()
            .position(|bound| &**bound == name)
            .map(|index| &self.shapes[index])
    }

    /// Number of bound parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Bound pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Shape)> {
        self.names.iter().zip(self.shapes.iter())
    }
}

impl Default for ParameterBinding {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
#[path = "../tests/binding_tests.rs"]
mod tests;
