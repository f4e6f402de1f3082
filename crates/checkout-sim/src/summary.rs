//! Per-interval and whole-run counters.

use checkout_core::Tick;

/// What happened during one interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct IntervalSummary {
    /// Zero-based interval number.
    pub index:      u64,
    /// Tick at which the batch arrived.
    pub start_tick: Tick,
    /// Tick of the last sweep (and of the status report).
    pub end_tick:   Tick,
    /// Customers created this interval.
    pub arrivals:   u32,
    /// Customers admitted to a lane.
    pub joined:     u32,
    /// Customers refused by their target lane.
    pub dropped:    u32,
    /// Customers that finished checkout during the sweeps.
    pub departed:   u32,
}

/// Totals over a whole run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub intervals:  u64,
    pub arrivals:   u64,
    pub joined:     u64,
    pub dropped:    u64,
    pub departed:   u64,
    pub final_tick: Tick,
}

impl RunSummary {
    pub(crate) fn record(&mut self, interval: &IntervalSummary) {
        self.intervals  += 1;
        self.arrivals   += interval.arrivals as u64;
        self.joined     += interval.joined as u64;
        self.dropped    += interval.dropped as u64;
        self.departed   += interval.departed as u64;
        self.final_tick  = interval.end_tick;
    }
}
