//! Common types for the genshape resolution engine.
//!
//! This crate provides the vocabulary a host uses to describe its nominal
//! types to the engine:
//! - Nominal identities and names (`NominalId`, `Name`)
//! - Type expressions as they appear in declarations (`TypeExpr`)
//! - Member references (`MemberRef`, `MemberSignature`)
//! - The `NominalTypeInfo` capability implemented by type metadata adapters
//! - Centralized limits and thresholds

// Nominal identities and the metadata capability
pub mod nominal;
pub use nominal::{Name, NominalId, NominalTypeInfo, SharedTypeInfo};

// Type expressions and member references
pub mod expr;
pub use expr::{MemberRef, MemberSignature, TypeExpr};

// Centralized limits and thresholds
pub mod limits;
