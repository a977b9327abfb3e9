//! The `PassengerModel` trait — the extension point for scripted demand.

use bus_cabin::SeatGrid;
use bus_route::Stop;

/// What the demand model wants to happen at one stop visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopAction {
    /// `n` passengers try to board.  The cabin clamps to availability, so
    /// over-asking is safe.
    Board(u32),
    /// These seat numbers alight.  Every entry must name an occupied,
    /// in-range seat; an invalid list aborts the run with the cabin's error.
    Alight(Vec<u32>),
    /// Drive through with no passenger activity.
    Pass,
}

/// Pluggable passenger demand for scripted runs.
///
/// Implement this trait to define what happens at each stop visit.  The
/// model sees the arriving stop (with its cumulative counters) and the
/// read-only cabin, and owns any randomness it needs — a
/// `bus_core::FlowRng` seeded once keeps whole runs reproducible.
///
/// Unlike the interactive menu, a model has no retry loop: whatever it
/// returns is applied directly, so `Alight` lists should be built from the
/// cabin's own snapshot to stay valid.
pub trait PassengerModel {
    /// Called once per visit, with the bus standing at `stop`.
    fn next_action(&mut self, stop: &Stop, cabin: &SeatGrid) -> StopAction;
}

/// A [`PassengerModel`] with no demand — every stop is passed.
///
/// Useful as a placeholder in tests or for dead-heading runs.
pub struct NoPassengers;

impl PassengerModel for NoPassengers {
    fn next_action(&mut self, _stop: &Stop, _cabin: &SeatGrid) -> StopAction {
        StopAction::Pass
    }
}
