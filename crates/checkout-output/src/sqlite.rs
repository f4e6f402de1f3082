//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `lane_snapshots` and `interval_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{IntervalSummaryRow, LaneSnapshotRow, OutputResult};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS lane_snapshots (
                 interval  INTEGER NOT NULL,
                 tick      INTEGER NOT NULL,
                 lane      TEXT    NOT NULL,
                 status    TEXT    NOT NULL,
                 occupancy INTEGER NOT NULL,
                 capacity  INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS interval_summaries (
                 interval   INTEGER PRIMARY KEY,
                 start_tick INTEGER NOT NULL,
                 end_tick   INTEGER NOT NULL,
                 arrivals   INTEGER NOT NULL,
                 joined     INTEGER NOT NULL,
                 dropped    INTEGER NOT NULL,
                 departed   INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_lane_snapshots(&mut self, rows: &[LaneSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO lane_snapshots \
                 (interval, tick, lane, status, occupancy, capacity) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.interval as i64,
                    row.tick as i64,
                    row.lane,
                    row.status,
                    row.occupancy,
                    row.capacity,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_interval_summary(&mut self, row: &IntervalSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO interval_summaries \
             (interval, start_tick, end_tick, arrivals, joined, dropped, departed) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.interval as i64,
                row.start_tick as i64,
                row.end_tick as i64,
                row.arrivals,
                row.joined,
                row.dropped,
                row.departed,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
