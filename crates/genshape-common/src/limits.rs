//! Centralized limits and constants for the resolution engine.
//!
//! # Categories
//!
//! - **Hierarchy limits**: bounds on inheritance graph walks
//! - **Naming**: names the engine synthesizes itself
//! - **Capacity**: inline sizes for small collections

// =============================================================================
// Hierarchy Limits
// =============================================================================

/// Maximum depth of a single supertype/interface walk.
///
/// Expression resolution is bounded by the nesting of the expression itself,
/// but the inheritance graph comes from the host and may be cyclic or
/// absurdly deep. A walk that nests past this depth fails with
/// `HierarchyTooDeep`.
///
/// ```text
/// class A extends B {}   // B extends C, C extends D, ... 256 levels
/// ```
pub const MAX_HIERARCHY_DEPTH: u32 = 256;

/// Maximum number of types a single hierarchy walk may enter.
///
/// Interface graphs with heavy diamond inheritance are walked once per path,
/// so the number of visits can grow much faster than the number of types.
pub const MAX_HIERARCHY_VISITS: u32 = 100_000;

// =============================================================================
// Naming
// =============================================================================

/// The single formal parameter every array type declares.
pub const ARRAY_ELEMENT_PARAM: &str = "E";

/// Suffix appended to a component's name to form an array type's name.
pub const ARRAY_NAME_SUFFIX: &str = "[]";

// =============================================================================
// Capacity
// =============================================================================

/// Inline capacity of a parameter binding before it spills to the heap.
///
/// Most generic declarations have one or two formal parameters; maps and
/// functional interfaces rarely exceed four.
pub const BINDING_INLINE_CAPACITY: usize = 4;
