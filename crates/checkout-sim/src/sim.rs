//! The `Sim` struct and its interval loop.

use std::time::Duration;

use checkout_core::{CheckoutConfig, SimClock, SimRng};
use checkout_lane::{
    AssignmentPolicy, CustomerGenerator, LaneSet, LaneSnapshot, ServiceTimes, StatusManager,
};
use log::{debug, info, warn};

use crate::{CheckoutObserver, IntervalSummary, RunSummary, SimError, SimResult, StopSignal};

/// Lifecycle of a [`Sim`].  `Stopped` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunState {
    Running,
    Stopped,
}

/// The main simulation runner.
///
/// `Sim<P>` holds the lanes, the customer stream, the clock, and the
/// assignment policy, and drives the interval loop described in the crate
/// docs.  Interval `k` starts at tick `k × interval_ticks`: the batch is
/// stamped with that tick, then one sweep runs at each of the following
/// `interval_ticks` ticks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: AssignmentPolicy> {
    /// Store layout, service times, and arrival model.
    pub config: CheckoutConfig,

    /// Simulation clock; maps ticks to wall time.
    pub clock: SimClock,

    /// Every lane in the store.
    pub lanes: LaneSet,

    /// Service-time policy shared by departures and assignment.
    pub times: ServiceTimes,

    /// Customer identifiers and basket sizes.
    pub generator: CustomerGenerator,

    /// Lane choice for each new customer.
    pub policy: P,

    /// Draws the number of arrivals per interval.
    pub(crate) arrivals_rng: SimRng,

    /// Block for `tick_duration_secs` of wall time on every tick.
    pub(crate) realtime: bool,

    pub(crate) state: RunState,
    pub(crate) totals: RunSummary,
}

impl<P: AssignmentPolicy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run intervals until `stop` asks to end, then report the final lane
    /// status and move to [`RunState::Stopped`].
    ///
    /// At least one interval always runs.  Returns the totals for the whole
    /// lifetime of this `Sim`.
    pub fn run<O, S>(&mut self, observer: &mut O, stop: &mut S) -> SimResult<RunSummary>
    where
        O: CheckoutObserver,
        S: StopSignal,
    {
        self.ensure_running()?;
        observer.on_sim_start(&self.clock);

        loop {
            let summary = self.run_interval(observer)?;
            if stop.should_stop(&summary) {
                break;
            }
        }

        self.state = RunState::Stopped;
        info!(
            "simulation stopped at {} after {} intervals",
            self.clock.current_tick, self.totals.intervals
        );
        let snapshots = LaneSnapshot::capture(&self.lanes);
        observer.on_sim_end(self.clock.current_tick, &snapshots);
        Ok(self.totals)
    }

    /// Run exactly one interval without consulting a stop signal.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_interval<O: CheckoutObserver>(&mut self, observer: &mut O) -> SimResult<IntervalSummary> {
        self.ensure_running()?;

        let start = self.clock.current_tick;
        let mut summary = IntervalSummary {
            index:      self.totals.intervals,
            start_tick: start,
            end_tick:   start,
            ..Default::default()
        };

        // ── Arrivals ──────────────────────────────────────────────────────
        summary.arrivals = self
            .arrivals_rng
            .gen_range(self.config.min_arrivals..=self.config.max_arrivals);
        info!(
            "interval {} at {}: {} customers waiting to join lanes",
            summary.index, self.clock, summary.arrivals
        );
        observer.on_interval_start(summary.index, &self.clock, summary.arrivals);

        for _ in 0..summary.arrivals {
            let customer = self.generator.create_customer(start);
            let target = self.policy.assign(&customer, &mut self.lanes);
            match StatusManager::new(&mut self.lanes).admit(customer, target) {
                Ok(()) => {
                    summary.joined += 1;
                    observer.on_join(start, &customer, target);
                }
                Err(customer) => {
                    summary.dropped += 1;
                    warn!(
                        "{} ({} items) dropped: {} cannot accept",
                        customer.id, customer.items, target
                    );
                    observer.on_drop(start, &customer, target);
                }
            }
        }

        // ── Departure sweeps ──────────────────────────────────────────────
        for _ in 0..self.config.interval_ticks {
            if self.realtime {
                std::thread::sleep(Duration::from_secs(self.clock.tick_duration_secs as u64));
            }
            self.clock.advance();
            let now = self.clock.current_tick;

            for lane in self.lanes.iter_mut() {
                for customer in lane.sweep_departures(now, &self.times) {
                    summary.departed += 1;
                    observer.on_depart(now, &customer, lane.kind);
                }
            }
        }

        // ── Report ────────────────────────────────────────────────────────
        summary.end_tick = self.clock.current_tick;
        let snapshots = StatusManager::new(&mut self.lanes).report();
        observer.on_report(summary.end_tick, &snapshots);

        debug!(
            "interval {} done: joined={} dropped={} departed={} in lanes={}",
            summary.index,
            summary.joined,
            summary.dropped,
            summary.departed,
            self.lanes.occupancy()
        );
        self.totals.record(&summary);
        observer.on_interval_end(&summary);
        Ok(summary)
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Totals so far.
    #[inline]
    pub fn totals(&self) -> RunSummary {
        self.totals
    }

    fn ensure_running(&self) -> SimResult<()> {
        match self.state {
            RunState::Running => Ok(()),
            RunState::Stopped => Err(SimError::AlreadyStopped(self.totals.intervals)),
        }
    }
}
