//! Customer identifiers and the counter that hands them out.
//!
//! Identifiers are `Copy + Ord + Hash` so they can be used as map keys and
//! compared for arrival order without ceremony.

use std::fmt;

/// Unique, process-wide customer identifier.  The first customer is `C1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerId(pub u32);

impl CustomerId {
    /// Sentinel meaning "no valid ID" (`u32::MAX`).
    pub const INVALID: CustomerId = CustomerId(u32::MAX);
}

impl Default for CustomerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl From<CustomerId> for u32 {
    #[inline(always)]
    fn from(id: CustomerId) -> u32 {
        id.0
    }
}

// ── CustomerIds ───────────────────────────────────────────────────────────────

/// Monotonic identifier counter.
///
/// Starts at 1 and is never reset or reused during a run.  The counter is an
/// owned value with a single mutation point ([`next_id`][Self::next_id]);
/// concurrent intake would need to wrap it in a `Mutex` or swap the inner
/// integer for an atomic.
#[derive(Clone, Debug)]
pub struct CustomerIds {
    next: u32,
}

impl CustomerIds {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next identifier.
    ///
    /// Once the id space is used up every further call returns
    /// [`CustomerId::INVALID`].
    pub fn next_id(&mut self) -> CustomerId {
        let id = CustomerId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    #[cfg(test)]
    pub(crate) fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Number of identifiers issued so far.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

impl Default for CustomerIds {
    fn default() -> Self {
        Self::new()
    }
}
