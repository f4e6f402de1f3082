//! `checkout-output` — reporting backends for the checkout lane simulator.
//!
//! | Type                  | Output                                                  |
//! |-----------------------|---------------------------------------------------------|
//! | [`TextReporter`]      | Human-readable join/leave lines and lane status lines   |
//! | [`CsvWriter`]         | `lane_snapshots.csv`, `interval_summaries.csv`          |
//! | `SqliteWriter`        | `output.db` (feature `sqlite`)                          |
//!
//! The file backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `checkout_sim::CheckoutObserver`.
//! Combine it with a `TextReporter` by passing the pair `(text, files)` as
//! the observer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use checkout_output::{CsvWriter, SimOutputObserver, TextReporter};
//!
//! let files = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let mut obs = (TextReporter::stdout(), files);
//! sim.run(&mut obs, &mut StopAfter(10))?;
//! if let Some(e) = obs.1.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{IntervalSummaryRow, LaneSnapshotRow};
pub use text::{format_lane_line, TextReporter};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
