//! Read-only seat views returned by [`SeatGrid`] queries.
//!
//! [`SeatGrid`]: crate::SeatGrid

use bus_core::StopName;

/// Snapshot of a single seat.
///
/// Owned data, detached from the grid: mutating the grid after taking a
/// snapshot never invalidates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInfo {
    /// Public 1-based seat number.
    pub number: u32,
    /// 0-based grid row.
    pub row: u16,
    /// 0-based grid column.
    pub col: u16,
    /// The stop the occupant boarded at; `None` for an empty seat.
    pub boarded_at: Option<StopName>,
}

impl SeatInfo {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.boarded_at.is_some()
    }
}

/// One seat freed by a batch alight, carrying the tag it held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasedSeat {
    /// Public 1-based seat number.
    pub number: u32,
    /// The stop the departing occupant had boarded at.
    pub boarded_at: StopName,
}
