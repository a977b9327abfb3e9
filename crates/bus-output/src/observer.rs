//! `VisitLogObserver` — bridges `ServiceObserver` to the CSV writer.

use bus_service::{ServiceObserver, StopVisit};

use crate::csv::VisitLogWriter;
use crate::error::{OutputError, OutputResult};
use crate::row::StopVisitRow;

/// A [`ServiceObserver`] that records every visit to a [`VisitLogWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `run_stops` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct VisitLogObserver {
    writer: VisitLogWriter,
    last_error: Option<OutputError>,
}

impl VisitLogObserver {
    pub fn new(writer: VisitLogWriter) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> VisitLogWriter {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl ServiceObserver for VisitLogObserver {
    fn on_visit(&mut self, visit: &StopVisit) {
        let row = StopVisitRow {
            visit: visit.visit,
            stop: visit.stop.to_string(),
            boarded: visit.boarded,
            alighted: visit.alighted,
            onboard: visit.onboard,
        };
        let result = self.writer.write_visit(&row);
        self.store_err(result);
    }

    fn on_service_end(&mut self, _visits: u64) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
