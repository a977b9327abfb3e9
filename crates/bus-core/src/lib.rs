//! `bus-core` — foundational types for the `ringbus` bus-service simulator.
//!
//! This crate is a dependency of every other `bus-*` crate.  It intentionally
//! has no `bus-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `SeatId`                                            |
//! | [`layout`] | `CabinLayout` — grid geometry and seat numbering    |
//! | [`name`]   | `StopName` — case-insensitive stop-name matching    |
//! | [`rng`]    | `FlowRng` — seeded RNG for scripted passenger flows |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod layout;
pub mod name;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::SeatId;
pub use layout::CabinLayout;
pub use name::StopName;
pub use rng::FlowRng;
