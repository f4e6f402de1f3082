//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing `Tick` counter.  The
//! mapping to wall-clock time is held in `SimClock`:
//!
//!   wall_time = start + tick * tick_duration_secs
//!
//! One tick is the departure-sweep granularity.  With the default
//! `tick_duration_secs = 1`, checkout durations (items × seconds-per-item)
//! are measured directly in ticks.  Customer arrival stamps and all elapsed
//! time comparisons use ticks, so a run is exact and independent of how
//! fast the host actually executes it.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// `YYYY-MM-DD HH:MM:SS`, the format of every printed timestamp.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Converts between tick counts and wall-clock time.
///
/// `SimClock` is cheap to copy and holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Wall-clock time of tick 0.
    pub start: DateTime<Utc>,
    /// How many real seconds one tick represents.  Default: 1.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each sweep.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock starting at `start` with the given resolution.
    pub fn new(start: DateTime<Utc>, tick_duration_secs: u32) -> Self {
        Self {
            start,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    /// Create a clock whose tick 0 is `start_unix_secs` seconds after the epoch.
    pub fn at_unix_secs(start_unix_secs: i64, tick_duration_secs: u32) -> CoreResult<Self> {
        let start = DateTime::<Utc>::from_timestamp(start_unix_secs, 0).ok_or_else(|| {
            CoreError::Config(format!("start time {start_unix_secs} is out of range"))
        })?;
        Ok(Self::new(start, tick_duration_secs))
    }

    /// Create a clock whose tick 0 is now.
    pub fn starting_now(tick_duration_secs: u32) -> Self {
        Self::new(Utc::now(), tick_duration_secs)
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> i64 {
        self.current_tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Wall-clock time corresponding to `current_tick`.
    #[inline]
    pub fn current_time(&self) -> DateTime<Utc> {
        self.start + TimeDelta::seconds(self.elapsed_secs())
    }

    /// Break elapsed time into (hours, minutes, seconds) from sim start.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total_secs = self.elapsed_secs().max(0) as u64;
        let hours = total_secs / 3_600;
        let minutes = ((total_secs % 3_600) / 60) as u32;
        let seconds = (total_secs % 60) as u32;
        (hours, minutes, seconds)
    }

    /// Wall-clock time of `current_tick` as `YYYY-MM-DD HH:MM:SS` (UTC).
    pub fn timestamp(&self) -> String {
        self.current_time().format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} (+{}:{:02}:{:02})", self.current_tick, h, m, s)
    }
}
