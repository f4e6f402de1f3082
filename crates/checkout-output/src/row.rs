//! Plain data row types written by output backends.

use checkout_lane::LaneSnapshot;
use checkout_sim::IntervalSummary;

/// One lane's status at the end of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneSnapshotRow {
    pub interval:  u64,
    pub tick:      u64,
    /// `Regular N` or `Self Service`.
    pub lane:      String,
    /// `Open` or `Closed`.
    pub status:    String,
    pub occupancy: u32,
    pub capacity:  u32,
}

impl LaneSnapshotRow {
    pub fn new(interval: u64, tick: u64, snapshot: &LaneSnapshot) -> Self {
        Self {
            interval,
            tick,
            lane:      snapshot.kind.to_string(),
            status:    snapshot.status.to_string(),
            occupancy: snapshot.occupancy() as u32,
            capacity:  snapshot.capacity as u32,
        }
    }
}

/// Counters for one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSummaryRow {
    pub interval:   u64,
    pub start_tick: u64,
    pub end_tick:   u64,
    pub arrivals:   u32,
    pub joined:     u32,
    pub dropped:    u32,
    pub departed:   u32,
}

impl From<&IntervalSummary> for IntervalSummaryRow {
    fn from(s: &IntervalSummary) -> Self {
        Self {
            interval:   s.index,
            start_tick: s.start_tick.0,
            end_tick:   s.end_tick.0,
            arrivals:   s.arrivals,
            joined:     s.joined,
            dropped:    s.dropped,
            departed:   s.departed,
        }
    }
}
