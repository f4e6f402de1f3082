//! `SimOutputObserver<W>` bridges `CheckoutObserver` to an `OutputWriter`.

use checkout_core::Tick;
use checkout_lane::LaneSnapshot;
use checkout_sim::{CheckoutObserver, IntervalSummary};

use crate::row::{IntervalSummaryRow, LaneSnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`CheckoutObserver`] that writes lane snapshots and interval summaries
/// to any [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Errors from the writer are stored internally because `CheckoutObserver`
/// methods have no return value.  After `sim.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Lanes reported at the end of the current interval, written together
    /// with its summary so both carry the same interval index.
    pending:    Vec<LaneSnapshot>,
    pending_at: Tick,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            pending_at: Tick::ZERO,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            log::error!("output write failed: {e}");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> CheckoutObserver for SimOutputObserver<W> {
    fn on_report(&mut self, tick: Tick, lanes: &[LaneSnapshot]) {
        self.pending = lanes.to_vec();
        self.pending_at = tick;
    }

    fn on_interval_end(&mut self, summary: &IntervalSummary) {
        let rows: Vec<LaneSnapshotRow> = std::mem::take(&mut self.pending)
            .iter()
            .map(|snap| LaneSnapshotRow::new(summary.index, self.pending_at.0, snap))
            .collect();
        let result = self.writer.write_lane_snapshots(&rows);
        self.store_err(result);

        let result = self.writer.write_interval_summary(&IntervalSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _lanes: &[LaneSnapshot]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
