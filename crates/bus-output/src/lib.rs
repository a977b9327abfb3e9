//! `bus-output` — stop-visit logging for the `ringbus` simulator.
//!
//! One backend, one file: [`VisitLogWriter`] appends a row per stop visit to
//! `stop_visits.csv`, and [`VisitLogObserver`] drives it from
//! `bus_service::ServiceObserver` callbacks.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bus_output::{VisitLogObserver, VisitLogWriter};
//!
//! let writer = VisitLogWriter::new(Path::new("./output"))?;
//! let mut obs = VisitLogObserver::new(writer);
//! service.run_stops(visits, &mut model, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("visit log error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;


pub use csv::VisitLogWriter;
pub use error::{OutputError, OutputResult};
pub use observer::VisitLogObserver;
pub use row::StopVisitRow;
