//! `bus-cabin` — seat-occupancy state machine for the `ringbus` simulator.
//!
//! # Crate layout
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`grid`] | `SeatGrid` — board / alight / query           |
//! | [`seat`] | `SeatInfo`, `ReleasedSeat` read-only views    |
//! | [`error`]| `CabinError`, `CabinResult`                   |
//!
//! The grid knows nothing about routes: boarding takes the stop name as an
//! opaque tag, and the route side of the system is reached only through the
//! `bus-service` context that owns both halves.

pub mod error;
pub mod grid;
pub mod seat;

#[cfg(test)]
mod tests;

pub use error::{CabinError, CabinResult};
pub use grid::SeatGrid;
pub use seat::{ReleasedSeat, SeatInfo};
