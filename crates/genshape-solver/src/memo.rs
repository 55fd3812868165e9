//! One-shot memoization cells for derived views of immutable values.
//!
//! A [`Memo`] starts unresolved. The first access computes the value and
//! publishes it; every later access, from any thread, observes that same
//! published value. There is no invalidation: a memo is only ever attached to
//! data that never changes after construction.

use std::fmt;
use std::sync::OnceLock;

/// A lazily computed, at-most-once-published value.
pub struct Memo<T> {
    cell: OnceLock<T>,
}

impl<T> Memo<T> {
    /// Create an unresolved cell.
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the published value, computing it with `init` on first access.
    ///
    /// Racing first accesses converge: exactly one value is published and all
    /// callers receive a reference to it. `init` must be pure.
    #[inline]
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }

    /// The published value, if any.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Whether a value has been published.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Memo").field(value).finish(),
            None => f.write_str("Memo(<unresolved>)"),
        }
    }
}

#[cfg(test)]
#[path = "../tests/memo_tests.rs"]
mod tests;
