//! The `OutputWriter` trait implemented by all backend writers.

use crate::{IntervalSummaryRow, LaneSnapshotRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write every lane's status for one interval.
    fn write_lane_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()>;

    /// Write one interval summary row.
    fn write_interval_summary(&mut self, row: &IntervalSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
