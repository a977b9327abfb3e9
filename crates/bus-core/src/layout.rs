//! Cabin geometry and the seat-numbering convention.
//!
//! # Design
//!
//! A cabin is a dense `rows × cols` grid.  The canonical seat identity is the
//! 0-based row-major [`SeatId`]; everything user-facing (menus, reports,
//! logs) speaks 1-based seat *numbers*:
//!
//!   number = id + 1        row = id / cols        col = id % cols
//!
//! Keeping the mapping here means the occupancy store never does coordinate
//! arithmetic and display code never touches raw indices.
//!
//! Dimensions are `u16`, so the capacity product always fits `u32` — the
//! only construction-time check is that neither dimension is zero.

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::ids::SeatId;

/// Validated cabin dimensions.  Cheap to copy; holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CabinLayout {
    rows: u16,
    cols: u16,
}

impl CabinLayout {
    /// Create a layout with the given dimensions.
    ///
    /// Returns [`CoreError::Config`] if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> CoreResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::Config(format!(
                "cabin layout must have non-zero dimensions, got {rows}x{cols}"
            )));
        }
        Ok(CabinLayout { rows, cols })
    }

    #[inline]
    pub fn rows(self) -> u16 {
        self.rows
    }

    #[inline]
    pub fn cols(self) -> u16 {
        self.cols
    }

    /// Total seat count.
    #[inline]
    pub fn capacity(self) -> u32 {
        self.rows as u32 * self.cols as u32
    }

    /// Resolve a public 1-based seat number to its id.
    ///
    /// Returns `None` for 0 and for numbers beyond the last seat, making this
    /// the single range check for all user-supplied seat numbers.
    #[inline]
    pub fn seat(self, number: u32) -> Option<SeatId> {
        if number == 0 || number > self.capacity() {
            None
        } else {
            Some(SeatId(number - 1))
        }
    }

    /// The public 1-based number of a seat.
    #[inline]
    pub fn number(self, seat: SeatId) -> u32 {
        seat.0 + 1
    }

    /// 0-based `(row, col)` grid coordinates of a seat.
    ///
    /// # Panics
    /// Panics in debug mode if `seat` is outside the cabin.
    #[inline]
    pub fn position(self, seat: SeatId) -> (u16, u16) {
        debug_assert!(seat.0 < self.capacity(), "seat {seat} outside {self}");
        ((seat.0 / self.cols as u32) as u16, (seat.0 % self.cols as u32) as u16)
    }
}

impl fmt::Display for CabinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Deserialization routes through [`CabinLayout::new`] so a dump cannot
/// smuggle in a zero dimension.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CabinLayout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(serde::Deserialize)]
        struct Raw {
            rows: u16,
            cols: u16,
        }

        let raw = Raw::deserialize(deserializer)?;
        CabinLayout::new(raw.rows, raw.cols).map_err(D::Error::custom)
    }
}
