//! Strongly typed, zero-cost seat identifier.
//!
//! `SeatId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! collection element without ceremony.  The inner integer is `pub` to allow
//! direct indexing into the seat-tag `Vec` via `id.0 as usize`, but callers
//! should prefer the `.index()` helper for clarity.
//!
//! A `SeatId` is the 0-based row-major position of a seat in the cabin grid;
//! the public-facing 1-based seat *number* is a [`CabinLayout`] concern.
//!
//! [`CabinLayout`]: crate::CabinLayout

use std::fmt;

/// 0-based row-major index of a seat in the cabin grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatId(pub u32);

impl SeatId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatId({})", self.0)
    }
}
