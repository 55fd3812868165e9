//! Nominal type identities and the metadata capability.
//!
//! The engine never inspects host type metadata directly. Everything it needs
//! to know about a named type declaration goes through [`NominalTypeInfo`],
//! which a host implements over its own reflection or symbol tables.

use crate::expr::{MemberRef, TypeExpr};
use std::fmt;
use std::sync::Arc;

/// Interned-by-sharing name of a type, formal parameter or member.
pub type Name = Arc<str>;

/// Shared handle to a metadata adapter.
pub type SharedTypeInfo = Arc<dyn NominalTypeInfo>;

// =============================================================================
// NominalId
// =============================================================================

/// Opaque identity of a nominal type declaration.
///
/// Identities are allocated by the metadata adapter. Two shapes with the same
/// `NominalId` and the same actual parameters are the same instantiation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NominalId(pub u32);

impl NominalId {
    /// Sentinel value for an invalid identity.
    pub const INVALID: Self = Self(0);

    /// First valid identity.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this identity is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

impl fmt::Display for NominalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NominalId({})", self.0)
    }
}

// =============================================================================
// NominalTypeInfo
// =============================================================================

/// Capability exposing nominal type metadata to the engine.
///
/// Implementations must be pure with respect to the engine: the same query
/// for the same identity returns the same answer for as long as shapes built
/// over that identity are alive. `array_of` is the only query allowed to
/// allocate, and it must be idempotent.
pub trait NominalTypeInfo: Send + Sync {
    /// Whether `id` is a type this adapter knows about.
    fn contains(&self, id: NominalId) -> bool;

    /// Simple (unqualified) name used by the canonical string form.
    fn simple_name(&self, id: NominalId) -> Name;

    /// Ordered formal parameter names declared by `id`.
    ///
    /// Array types declare exactly one formal parameter,
    /// [`ARRAY_ELEMENT_PARAM`](crate::limits::ARRAY_ELEMENT_PARAM).
    fn formal_parameters(&self, id: NominalId) -> Arc<[Name]>;

    /// Component type if `id` is an array type.
    fn array_component(&self, id: NominalId) -> Option<NominalId>;

    /// The array type whose component is `component`, created on first use.
    fn array_of(&self, component: NominalId) -> NominalId;

    /// Declared generic supertype expression. `None` for root types and
    /// interfaces.
    fn supertype(&self, id: NominalId) -> Option<TypeExpr>;

    /// Declared generic interface expressions, in declaration order.
    fn interfaces(&self, id: NominalId) -> Vec<TypeExpr>;

    /// Member named `name` declared directly on `id` (inherited members are
    /// not reported here).
    fn member(&self, id: NominalId, name: &str) -> Option<MemberRef>;

    /// Whether `id` is an array type.
    fn is_array(&self, id: NominalId) -> bool {
        self.array_component(id).is_some()
    }
}
