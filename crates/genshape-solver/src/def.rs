//! In-memory nominal type metadata.
//!
//! `DefinitionStore` implements [`NominalTypeInfo`] for hosts that have no
//! native type metadata to adapt, and for tests. Definitions are registered
//! up front; supertype and member clauses may be attached after registration
//! so that types can refer to themselves or to each other.
//!
//! ## Usage
//!
//! ```ignore
//! let store = DefinitionStore::new();
//! let object = store.register(DefinitionInfo::class("Object"));
//! let list = store.register(DefinitionInfo::interface("List").with_params(&["E"]));
//! store.add_member(list, "get", MemberSignature::Callable { .. });
//! ```

use dashmap::DashMap;
use genshape_common::limits::{ARRAY_ELEMENT_PARAM, ARRAY_NAME_SUFFIX};
use genshape_common::{MemberRef, MemberSignature, Name, NominalId, NominalTypeInfo, TypeExpr};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// DefKind
// =============================================================================

/// Kind of nominal declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefKind {
    /// Class: at most one supertype, any number of interfaces.
    Class,
    /// Interface: no supertype, any number of super-interfaces.
    Interface,
    /// Array type synthesized by [`DefinitionStore::array_of`].
    Array,
}

// =============================================================================
// DefinitionInfo
// =============================================================================

/// Everything the store knows about one nominal type.
#[derive(Clone, Debug)]
pub struct DefinitionInfo {
    pub kind: DefKind,

    /// Simple name used by the canonical string form
    pub name: Name,

    /// Declared formal parameter names, in order
    pub type_params: Arc<[Name]>,

    /// Declared supertype expression (classes only)
    pub supertype: Option<TypeExpr>,

    /// Declared interface expressions, in declaration order
    pub interfaces: Vec<TypeExpr>,

    /// Members declared directly on this type
    pub members: Vec<(Name, MemberSignature)>,

    /// For arrays: the component type
    pub component: Option<NominalId>,
}

impl DefinitionInfo {
    fn new(kind: DefKind, name: &str) -> Self {
        Self {
            kind,
            name: Name::from(name),
            type_params: Arc::from([]),
            supertype: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            component: None,
        }
    }

    /// Create a new class definition.
    pub fn class(name: &str) -> Self {
        Self::new(DefKind::Class, name)
    }

    /// Create a new interface definition.
    pub fn interface(name: &str) -> Self {
        Self::new(DefKind::Interface, name)
    }

    /// Create the definition of an array over `component`.
    fn array(component_name: &str, component: NominalId) -> Self {
        let mut info = Self::new(
            DefKind::Array,
            &format!("{component_name}{ARRAY_NAME_SUFFIX}"),
        );
        info.type_params = Arc::from([Name::from(ARRAY_ELEMENT_PARAM)]);
        info.component = Some(component);
        info
    }

    /// Set the declared formal parameters.
    pub fn with_params(mut self, params: &[&str]) -> Self {
        self.type_params = params.iter().map(|param| Name::from(*param)).collect();
        self
    }

    /// Set the declared supertype.
    pub fn with_supertype(mut self, supertype: TypeExpr) -> Self {
        self.supertype = Some(supertype);
        self
    }

    /// Set the declared interfaces.
    pub fn with_interfaces(mut self, interfaces: Vec<TypeExpr>) -> Self {
        self.interfaces = interfaces;
        self
    }

    /// Declare a field.
    pub fn with_field(mut self, name: &str, ty: TypeExpr) -> Self {
        self.members
            .push((Name::from(name), MemberSignature::Field(ty)));
        self
    }

    /// Declare a callable without declared exceptions.
    pub fn with_method(mut self, name: &str, return_type: TypeExpr, params: Vec<TypeExpr>) -> Self {
        self.members.push((
            Name::from(name),
            MemberSignature::Callable {
                return_type,
                params,
                exceptions: Vec::new(),
            },
        ));
        self
    }
}

// =============================================================================
// DefinitionStore
// =============================================================================

/// Thread-safe storage for nominal type definitions.
///
/// Uses `DashMap` so resolution on many threads can read definitions while
/// array types are synthesized on demand.
pub struct DefinitionStore {
    /// `NominalId` -> `DefinitionInfo` mapping
    definitions: DashMap<NominalId, DefinitionInfo>,

    /// Component -> synthesized array type
    arrays: DashMap<NominalId, NominalId>,

    /// Next available `NominalId`
    next_id: AtomicU32,
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionStore {
    /// Create a new definition store.
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            arrays: DashMap::new(),
            next_id: AtomicU32::new(NominalId::FIRST_VALID),
        }
    }

    fn allocate(&self) -> NominalId {
        NominalId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new definition and return its `NominalId`.
    pub fn register(&self, info: DefinitionInfo) -> NominalId {
        let id = self.allocate();
        trace!(
            nominal_id = id.0,
            kind = ?info.kind,
            name = %info.name,
            "DefinitionStore::register"
        );
        self.definitions.insert(id, info);
        id
    }

    /// Get definition info by `NominalId`.
    pub fn get(&self, id: NominalId) -> Option<DefinitionInfo> {
        self.definitions.get(&id).map(|r| r.value().clone())
    }

    /// Find a definition by simple name. Linear; intended for setup and tests.
    pub fn find_by_name(&self, name: &str) -> Option<NominalId> {
        self.definitions
            .iter()
            .find(|entry| &*entry.value().name == name)
            .map(|entry| *entry.key())
    }

    /// Set the supertype clause of an already registered type.
    pub fn set_supertype(&self, id: NominalId, supertype: TypeExpr) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.supertype = Some(supertype);
        }
    }

    /// Append an interface clause to an already registered type.
    pub fn add_interface(&self, id: NominalId, interface: TypeExpr) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.interfaces.push(interface);
        }
    }

    /// Declare a member on an already registered type.
    pub fn add_member(&self, id: NominalId, name: &str, signature: MemberSignature) {
        if let Some(mut entry) = self.definitions.get_mut(&id) {
            entry.members.push((Name::from(name), signature));
        }
    }

    /// Get the kind of a definition.
    pub fn get_kind(&self, id: NominalId) -> Option<DefKind> {
        self.definitions.get(&id).map(|r| r.kind)
    }

    /// Number of definitions, including synthesized arrays.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl NominalTypeInfo for DefinitionStore {
    fn contains(&self, id: NominalId) -> bool {
        self.definitions.contains_key(&id)
    }

    fn simple_name(&self, id: NominalId) -> Name {
        self.definitions
            .get(&id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| Name::from(id.to_string()))
    }

    fn formal_parameters(&self, id: NominalId) -> Arc<[Name]> {
        self.definitions
            .get(&id)
            .map(|r| Arc::clone(&r.type_params))
            .unwrap_or_else(|| Arc::from([]))
    }

    fn array_component(&self, id: NominalId) -> Option<NominalId> {
        self.definitions.get(&id).and_then(|r| r.component)
    }

    fn array_of(&self, component: NominalId) -> NominalId {
        if let Some(existing) = self.arrays.get(&component) {
            return *existing;
        }
        // The entry lock on `arrays` makes creation atomic per component;
        // registration only touches `definitions`.
        let name = self.simple_name(component);
        *self
            .arrays
            .entry(component)
            .or_insert_with(|| self.register(DefinitionInfo::array(&name, component)))
    }

    fn supertype(&self, id: NominalId) -> Option<TypeExpr> {
        self.definitions.get(&id).and_then(|r| r.supertype.clone())
    }

    fn interfaces(&self, id: NominalId) -> Vec<TypeExpr> {
        self.definitions
            .get(&id)
            .map(|r| r.interfaces.clone())
            .unwrap_or_default()
    }

    fn member(&self, id: NominalId, name: &str) -> Option<MemberRef> {
        let entry = self.definitions.get(&id)?;
        entry
            .members
            .iter()
            .find(|(member, _)| &**member == name)
            .map(|(member, signature)| MemberRef {
                declaring: id,
                name: member.clone(),
                signature: signature.clone(),
            })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
