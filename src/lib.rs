//! Canonical shapes for generic type instantiations.
//!
//! `genshape` resolves type expressions such as `Map<K, List<V>>` over a host
//! type system into structurally comparable [`Shape`]s, and answers "what is
//! the type of this member as seen from that instantiation" questions along
//! the inheritance graph.
//!
//! ```ignore
//! let store = Arc::new(DefinitionStore::new());
//! let string = store.register(DefinitionInfo::class("String"));
//! let list = store.register(
//!     DefinitionInfo::interface("List")
//!         .with_params(&["E"])
//!         .with_method("get", TypeExpr::param("E"), vec![]),
//! );
//!
//! let resolver = Resolver::new(store.clone());
//! let shape = resolver.resolve(
//!     &TypeExpr::generic(list, vec![string.into()]),
//!     &ParameterBinding::EMPTY,
//! )?;
//! assert_eq!(shape.to_string(), "List<String>");
//!
//! let get = store.member(list, "get").unwrap();
//! let ty = MemberResolver::new(&resolver).member_type_of(&shape, &get)?;
//! assert_eq!(ty.to_string(), "String");
//! ```

// Facade vocabulary shared with host adapters
pub use genshape_common::limits;
pub use genshape_common::{
    MemberRef, MemberSignature, Name, NominalId, NominalTypeInfo, SharedTypeInfo, TypeExpr,
};

// Resolution engine
pub use genshape_solver::hierarchy_guard::{GuardStep, HierarchyGuard};
pub use genshape_solver::{
    DefKind, DefinitionInfo, DefinitionStore, HierarchyLimits, Memo, MemberResolver,
    ParameterBinding, ResolvedMember, Resolver, Result, Shape, ShapeCache, ShapeError,
};

// Tracing configuration (GENSHAPE_LOG / GENSHAPE_LOG_FORMAT)
pub mod tracing_config;
