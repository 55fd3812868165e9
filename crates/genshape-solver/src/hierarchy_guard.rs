//! Bookkeeping for inheritance graph walks.
//!
//! Expression resolution recurses over a finite expression tree and needs no
//! protection. Hierarchy walks follow supertype and interface clauses supplied
//! by the host, which may declare `A extends B`, `B extends A`. A
//! [`HierarchyGuard`] keeps the path from the starting type to the type being
//! visited and refuses to step:
//!
//! - onto a type already on that path (a cycle),
//! - deeper than [`HierarchyLimits::max_depth`],
//! - after [`HierarchyLimits::max_visits`] steps in total.
//!
//! Steps must be undone in reverse order. Debug builds check this on every
//! [`HierarchyGuard::step_out`] and again when the guard is dropped.

use genshape_common::NominalId;
use genshape_common::limits::{MAX_HIERARCHY_DEPTH, MAX_HIERARCHY_VISITS};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Limits applied to one hierarchy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchyLimits {
    pub max_depth: u32,
    pub max_visits: u32,
}

impl Default for HierarchyLimits {
    fn default() -> Self {
        Self {
            max_depth: MAX_HIERARCHY_DEPTH,
            max_visits: MAX_HIERARCHY_VISITS,
        }
    }
}

impl HierarchyLimits {
    /// Builder: override the maximum path length.
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder: override the total step budget.
    pub const fn with_max_visits(mut self, max_visits: u32) -> Self {
        self.max_visits = max_visits;
        self
    }
}

/// Outcome of [`HierarchyGuard::step_into`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStep {
    /// The type is now on the path; undo with `step_out`.
    Entered,
    /// The type is already on the path.
    Cycle,
    /// The path is already `max_depth` long.
    TooDeep,
    /// The walk has used up its step budget.
    OutOfVisits,
}

impl GuardStep {
    #[inline]
    pub fn is_entered(self) -> bool {
        self == Self::Entered
    }

    /// Whether the walk must stop with an error.
    #[inline]
    pub fn is_limit(self) -> bool {
        matches!(self, Self::TooDeep | Self::OutOfVisits)
    }
}

/// The current path of a hierarchy walk.
pub struct HierarchyGuard {
    path: SmallVec<[NominalId; 8]>,
    on_path: FxHashSet<NominalId>,
    visits: u32,
    limits: HierarchyLimits,
}

impl HierarchyGuard {
    pub fn new(limits: HierarchyLimits) -> Self {
        Self {
            path: SmallVec::new(),
            on_path: FxHashSet::default(),
            visits: 0,
            limits,
        }
    }

    /// Try to extend the path with `id`.
    ///
    /// Every attempt counts against the step budget, including refused ones.
    pub fn step_into(&mut self, id: NominalId) -> GuardStep {
        self.visits = self.visits.saturating_add(1);
        if self.visits > self.limits.max_visits {
            return GuardStep::OutOfVisits;
        }
        if self.depth() >= self.limits.max_depth {
            return GuardStep::TooDeep;
        }
        if !self.on_path.insert(id) {
            return GuardStep::Cycle;
        }
        self.path.push(id);
        GuardStep::Entered
    }

    /// Remove `id`, which must be the last type entered, from the path.
    pub fn step_out(&mut self, id: NominalId) {
        let last = self.path.pop();
        debug_assert_eq!(
            last,
            Some(id),
            "HierarchyGuard::step_out out of order; path was {:?}",
            self.path
        );
        self.on_path.remove(&id);
    }

    /// Types from the walk's start to the type being visited.
    pub fn path(&self) -> &[NominalId] {
        &self.path
    }

    /// Current path length.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.path.len() as u32
    }

    /// Steps attempted so far.
    #[inline]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn limits(&self) -> HierarchyLimits {
        self.limits
    }
}

#[cfg(debug_assertions)]
impl Drop for HierarchyGuard {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.path.is_empty() {
            panic!(
                "HierarchyGuard dropped mid-walk; unmatched step_into for {:?}",
                self.path
            );
        }
    }
}

#[cfg(test)]
#[path = "../tests/hierarchy_guard_tests.rs"]
mod tests;
