//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `lane_snapshots.csv`
//! - `interval_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{IntervalSummaryRow, LaneSnapshotRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("lane_snapshots.csv"))?;
        snapshots.write_record(["interval", "tick", "lane", "status", "occupancy", "capacity"])?;

        let mut summaries = Writer::from_path(dir.join("interval_summaries.csv"))?;
        summaries.write_record([
            "interval", "start_tick", "end_tick", "arrivals", "joined", "dropped", "departed",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_lane_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.interval.to_string(),
                row.tick.to_string(),
                row.lane.clone(),
                row.status.clone(),
                row.occupancy.to_string(),
                row.capacity.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_interval_summary(&mut self, row: &IntervalSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.interval.to_string(),
            row.start_tick.to_string(),
            row.end_tick.to_string(),
            row.arrivals.to_string(),
            row.joined.to_string(),
            row.dropped.to_string(),
            row.departed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
