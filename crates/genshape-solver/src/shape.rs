//! Canonical descriptors of resolved types.
//!
//! A [`Shape`] is one instantiation of a nominal type: its raw identity plus
//! the shapes bound to each of its formal parameters. Shapes are immutable,
//! cheap to clone and compared structurally, so two shapes built
//! independently for `Map<String, List<String>>` are equal and hash alike.
//!
//! Formal parameters, the structural hash and the canonical string form are
//! derived views. They are computed on first use and memoized per shape.

use crate::binding::ParameterBinding;
use crate::error::{Result, ShapeError};
use crate::memo::Memo;
use genshape_common::limits::ARRAY_NAME_SUFFIX;
use genshape_common::{Name, NominalId, SharedTypeInfo};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A fully resolved type: raw identity plus ordered actual parameters.
#[derive(Clone)]
pub struct Shape(Arc<ShapeData>);

struct ShapeData {
    raw: NominalId,
    actual: Vec<Shape>,
    /// Metadata adapter the raw identity belongs to. Not part of identity.
    db: SharedTypeInfo,
    formal: Memo<Arc<[Name]>>,
    hash: Memo<u64>,
    display: Memo<Box<str>>,
}

impl Shape {
    /// Build a shape without checking arity. Callers are the resolver and the
    /// binding machinery, which only produce well-formed shapes.
    pub(crate) fn from_parts(db: SharedTypeInfo, raw: NominalId, actual: Vec<Shape>) -> Self {
        Self(Arc::new(ShapeData {
            raw,
            actual,
            db,
            formal: Memo::new(),
            hash: Memo::new(),
            display: Memo::new(),
        }))
    }

    /// The raw nominal identity.
    #[inline]
    pub fn raw(&self) -> NominalId {
        self.0.raw
    }

    /// The actual parameters, in formal-parameter order.
    #[inline]
    pub fn actual_parameters(&self) -> &[Shape] {
        &self.0.actual
    }

    /// The formal parameter names declared by the raw identity.
    pub fn formal_parameters(&self) -> &[Name] {
        self.0
            .formal
            .get_or_init(|| self.0.db.formal_parameters(self.0.raw))
    }

    /// The actual parameter bound to the formal parameter `name`.
    pub fn actual_parameter(&self, name: &str) -> Result<&Shape> {
        self.formal_parameters()
            .iter()
            .position(|formal| &**formal == name)
            .and_then(|index| self.0.actual.get(index))
            .ok_or_else(|| ShapeError::UnknownFormalParameter {
                name: Name::from(name),
                shape: self.to_string(),
            })
    }

    /// Whether this is a raw (unparameterized) use of its type.
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.0.actual.is_empty()
    }

    /// Whether the raw identity is an array type.
    pub fn is_array(&self) -> bool {
        self.0.db.is_array(self.0.raw)
    }

    /// Element shape of an array shape.
    pub fn component(&self) -> Option<&Shape> {
        if self.is_array() {
            self.0.actual.first()
        } else {
            None
        }
    }

    /// Simple name of the raw identity.
    pub fn simple_name(&self) -> Name {
        self.0.db.simple_name(self.0.raw)
    }

    /// The binding of this shape's formal parameters to its actual parameters.
    pub fn binding(&self) -> Result<ParameterBinding> {
        ParameterBinding::for_shape(self)
    }

    /// Canonical string form, memoized: `Map<String, List<String>>`, `String[]`.
    pub fn display_name(&self) -> &str {
        self.0.display.get_or_init(|| self.render().into_boxed_str())
    }

    /// The metadata adapter this shape was resolved against.
    pub fn type_info(&self) -> &SharedTypeInfo {
        &self.0.db
    }

    /// Structural hash over `(raw, actual)`, memoized.
    pub fn structural_hash(&self) -> u64 {
        *self.0.hash.get_or_init(|| {
            let mut hasher = FxHasher::default();
            self.0.raw.hash(&mut hasher);
            hasher.write_usize(self.0.actual.len());
            for param in &self.0.actual {
                hasher.write_u64(param.structural_hash());
            }
            hasher.finish()
        })
    }

    fn render(&self) -> String {
        if let Some(component) = self.component() {
            return format!("{}{ARRAY_NAME_SUFFIX}", component.display_name());
        }

        let name = self.simple_name();
        if self.0.actual.is_empty() {
            return name.to_string();
        }

        let args: Vec<&str> = self.0.actual.iter().map(Shape::display_name).collect();
        format!("{name}<{}>", args.join(", "))
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0.raw == other.0.raw
            && self.0.actual.len() == other.0.actual.len()
            && self.structural_hash() == other.structural_hash()
            && self.0.actual == other.0.actual
    }
}

impl Eq for Shape {}

impl Hash for Shape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({} {})", self.0.raw.0, self.display_name())
    }
}

#[cfg(test)]
#[path = "../tests/shape_tests.rs"]
mod tests;
