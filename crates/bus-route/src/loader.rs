//! CSV route loader.
//!
//! # CSV format
//!
//! One row per stop, in ring order.  The first row becomes the head and the
//! initial current stop.
//!
//! ```csv
//! name
//! Depot
//! Market Street
//! Harbor
//! ```
//!
//! Names pass the same validation as `RouteRing::append`: blank names and
//! case-insensitive duplicates are rejected, and a header-only file is
//! [`RouteError::EmptyRoute`].

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RouteError, RouteResult};
use crate::ring::RouteRing;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StopRecord {
    name: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a route from a CSV file.
pub fn load_route_csv(path: &Path) -> RouteResult<RouteRing> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_route_reader(file)
}

/// Like [`load_route_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for routes embedded in
/// a binary as string constants.
pub fn load_route_reader<R: Read>(reader: R) -> RouteResult<RouteRing> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut names = Vec::new();
    for result in csv_reader.deserialize::<StopRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        names.push(row.name);
    }
    RouteRing::from_names(names)
}
