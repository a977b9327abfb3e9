//! Read-only reports produced by [`Service`] operations.
//!
//! Reports carry owned data (names cloned out of the route, seat numbers
//! copied out of the cabin), so callers can hold them across later
//! mutations — a menu prints from the report, never from live state.
//!
//! [`Service`]: crate::Service

use bus_cabin::ReleasedSeat;
use bus_core::StopName;

/// Outcome of boarding at one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingReport {
    /// The stop the passengers boarded at.
    pub stop: StopName,
    /// How many asked to board.
    pub requested: u32,
    /// Seat numbers allocated, ascending.  Shorter than `requested` when the
    /// cabin ran out of seats.
    pub seats: Vec<u32>,
    /// Where the bus is heading next.
    pub next_stop: StopName,
}

impl BoardingReport {
    /// Number of passengers actually seated.
    #[inline]
    pub fn boarded(&self) -> u32 {
        self.seats.len() as u32
    }

    /// `true` if demand exceeded availability.
    #[inline]
    pub fn clamped(&self) -> bool {
        self.boarded() < self.requested
    }
}

/// Outcome of a successful alighting at one stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlightingReport {
    /// The stop the passengers alighted at (and were recorded against).
    pub stop: StopName,
    /// Freed seats in ascending number order, each with its boarding tag.
    pub released: Vec<ReleasedSeat>,
    /// Where the bus is heading next.
    pub next_stop: StopName,
}

impl AlightingReport {
    #[inline]
    pub fn alighted(&self) -> u32 {
        self.released.len() as u32
    }
}

/// Outcome of passing a stop with no passenger activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub stop: StopName,
    pub next_stop: StopName,
}

/// Per-stop statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopStats {
    pub name: StopName,
    /// Cumulative passengers boarded while this stop was current.
    pub boarded: u32,
    /// Cumulative passengers alighted while this stop was current.
    pub alighted: u32,
    /// Occupied seats whose boarding tag matches this stop right now.
    pub still_onboard: u32,
    pub is_current: bool,
}

/// Point-in-time summary of the whole service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub current_stop: StopName,
    /// One row per stop in route order, head first.
    pub stops: Vec<StopStats>,
    pub onboard: u32,
    pub available: u32,
    pub capacity: u32,
}

/// What happened during one visit of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopVisit {
    /// 1-based visit sequence number.
    pub visit: u64,
    /// The stop that was visited.
    pub stop: StopName,
    pub boarded: u32,
    pub alighted: u32,
    /// Passengers onboard after the visit.
    pub onboard: u32,
}
