//! `bus-route` — the circular stop sequence for the `ringbus` simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`stop`]   | `Stop` — name plus cumulative counters          |
//! | [`ring`]   | `RouteRing` — cursor, traversal, edits          |
//! | [`loader`] | `load_route_csv`, `load_route_reader`           |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                  |
//!
//! The route knows nothing about seats: boarding and alighting reach it only
//! as `record_*` counter bumps from the `bus-service` context.  Stop names
//! are the single key shared with the cabin side, and the ring hands them
//! out by value so seat tags survive route edits.

pub mod error;
pub mod loader;
pub mod ring;
pub mod stop;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use loader::{load_route_csv, load_route_reader};
pub use ring::RouteRing;
pub use stop::Stop;
