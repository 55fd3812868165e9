//! Generic type-shape resolution.
//!
//! This crate turns type expressions over nominal declarations into
//! canonical, structurally comparable [`Shape`]s, and resolves member types
//! along inheritance graphs. It uses:
//!
//! - **`NominalTypeInfo`**: the only window onto host type metadata
//! - **Structural shapes**: `Arc`-backed values with memoized hash and
//!   string form, equal whenever they describe the same instantiation
//! - **`DashMap`**: explicit concurrent caches with compute-if-absent
//! - **Hierarchy guards**: cycle and depth protection for inheritance walks
//!
//! Key properties:
//! - Resolution is pure and all-or-nothing
//! - Everything is `Send + Sync`; no global state
//! - Arrays have one shape whether named directly or built from `T[]`
mod binding;
mod cache;
pub mod def;
mod error;
pub mod hierarchy_guard;
mod member;
mod memo;
mod resolve;
mod shape;

pub use binding::ParameterBinding;
pub use cache::ShapeCache;
pub use def::{DefKind, DefinitionInfo, DefinitionStore};
pub use error::{Result, ShapeError};
pub use member::{MemberResolver, ResolvedMember};
pub use memo::Memo;
pub use hierarchy_guard::HierarchyLimits;
pub use resolve::Resolver;
pub use shape::Shape;

pub use genshape_common::{
    MemberRef, MemberSignature, Name, NominalId, NominalTypeInfo, SharedTypeInfo, TypeExpr,
};

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
pub(crate) mod test_fixtures;
