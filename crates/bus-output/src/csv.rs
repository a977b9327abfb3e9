//! CSV output backend.
//!
//! Creates one file in the configured output directory:
//! - `stop_visits.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::error::OutputResult;
use crate::row::StopVisitRow;

/// Writes the stop-visit log to a CSV file.
pub struct VisitLogWriter {
    visits: Writer<File>,
    finished: bool,
}

impl VisitLogWriter {
    /// Open (or create) `stop_visits.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut visits = Writer::from_path(dir.join("stop_visits.csv"))?;
        visits.write_record(["visit", "stop", "boarded", "alighted", "onboard"])?;
        Ok(Self { visits, finished: false })
    }

    pub fn write_visit(&mut self, row: &StopVisitRow) -> OutputResult<()> {
        self.visits.write_record(&[
            row.visit.to_string(),
            row.stop.clone(),
            row.boarded.to_string(),
            row.alighted.to_string(),
            row.onboard.to_string(),
        ])?;
        Ok(())
    }

    /// Flush buffered rows.  Safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.visits.flush()?;
        Ok(())
    }
}
