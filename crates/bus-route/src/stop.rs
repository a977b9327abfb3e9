//! A single route stop and its cumulative activity counters.

use bus_core::StopName;

/// One waypoint on the circular route.
///
/// The counters are lifetime totals for the stop, not current occupancy:
/// they only ever increase, and `alighted` is attributed to whichever stop
/// is current when passengers get off (not the stop they boarded at).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// Display name; compared case-insensitively everywhere.
    pub name: StopName,
    /// Passengers boarded while this stop was current.
    pub boarded: u32,
    /// Passengers alighted while this stop was current.
    pub alighted: u32,
}

impl Stop {
    pub fn new(name: impl Into<StopName>) -> Self {
        Stop {
            name:     name.into(),
            boarded:  0,
            alighted: 0,
        }
    }
}
