//! Top-level simulation configuration.
//!
//! Every constant the simulator depends on lives in [`CheckoutConfig`].  The
//! `Default` impl reproduces the stock store layout: five cashier lanes of
//! capacity 5, one self-service lane of capacity 15, 30-tick intervals.
//!
//! With the `serde` feature the struct is `#[serde(default)]`, so a JSON file
//! only needs the fields it wants to override:
//!
//! ```json
//! { "regular_lanes": 3, "seed": 7 }
//! ```

use crate::{CoreError, CoreResult, SimClock};

// ── CheckoutConfig ────────────────────────────────────────────────────────────

/// Store layout, service-time policy, and arrival model for one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CheckoutConfig {
    /// Number of cashier lanes, named `Regular 1` … `Regular N`.
    pub regular_lanes: usize,

    /// Maximum occupants of each cashier lane.
    pub regular_capacity: usize,

    /// Maximum occupants of the single self-service lane.
    pub self_service_capacity: usize,

    /// Seconds per item for baskets at or above `item_threshold`.
    pub cashier_secs_per_item: u64,

    /// Seconds per item for baskets below `item_threshold`.
    pub self_service_secs_per_item: u64,

    /// Baskets with fewer items go to self-service; the rest to a cashier.
    pub item_threshold: u32,

    /// Ticks per interval (arrivals happen once at the start of each).
    pub interval_ticks: u64,

    /// How many real seconds one tick represents.
    pub tick_duration_secs: u32,

    /// Inclusive basket-size range.
    pub min_items: u32,
    pub max_items: u32,

    /// Inclusive range for the number of arrivals per interval.
    pub min_arrivals: u32,
    pub max_arrivals: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Unix timestamp for tick 0.  `None` starts the clock at the moment
    /// the simulation is built.
    pub start_unix_secs: Option<i64>,

    /// Lane names that start `Open`; every other lane starts `Closed`.
    pub initially_open: Vec<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            regular_lanes:              5,
            regular_capacity:           5,
            self_service_capacity:      15,
            cashier_secs_per_item:      4,
            self_service_secs_per_item: 6,
            item_threshold:             10,
            interval_ticks:             30,
            tick_duration_secs:         1,
            min_items:                  1,
            max_items:                  30,
            min_arrivals:               1,
            max_arrivals:               10,
            seed:                       42,
            start_unix_secs:            None,
            initially_open:             vec!["Regular 1".to_owned(), "Self Service".to_owned()],
        }
    }
}

impl CheckoutConfig {
    /// Check numeric invariants.  Lane names in `initially_open` are checked
    /// when the lane set is built, since lane naming belongs to that crate.
    pub fn validate(&self) -> CoreResult<()> {
        if self.regular_capacity == 0 {
            return Err(CoreError::Config("regular_capacity must be positive".into()));
        }
        if self.self_service_capacity == 0 {
            return Err(CoreError::Config("self_service_capacity must be positive".into()));
        }
        if self.interval_ticks == 0 {
            return Err(CoreError::Config("interval_ticks must be positive".into()));
        }
        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be positive".into()));
        }
        if self.min_items > self.max_items {
            return Err(CoreError::Config(format!(
                "item range [{}, {}] is inverted",
                self.min_items, self.max_items
            )));
        }
        if self.min_arrivals > self.max_arrivals {
            return Err(CoreError::Config(format!(
                "arrival range [{}, {}] is inverted",
                self.min_arrivals, self.max_arrivals
            )));
        }
        if let Some(secs) = self.start_unix_secs {
            self.make_clock_at(secs)?;
        }
        if self.regular_lanes > u8::MAX as usize {
            return Err(CoreError::Config(format!(
                "at most {} regular lanes are supported, got {}",
                u8::MAX,
                self.regular_lanes
            )));
        }
        Ok(())
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> CoreResult<SimClock> {
        match self.start_unix_secs {
            Some(secs) => self.make_clock_at(secs),
            None => Ok(SimClock::starting_now(self.tick_duration_secs)),
        }
    }

    fn make_clock_at(&self, start_unix_secs: i64) -> CoreResult<SimClock> {
        SimClock::at_unix_secs(start_unix_secs, self.tick_duration_secs)
    }
}
