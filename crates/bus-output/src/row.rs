//! Plain data row types written by the CSV backend.

/// One stop visit of a scripted run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopVisitRow {
    /// 1-based visit sequence number.
    pub visit: u64,
    pub stop: String,
    pub boarded: u32,
    pub alighted: u32,
    /// Passengers onboard after the visit.
    pub onboard: u32,
}
