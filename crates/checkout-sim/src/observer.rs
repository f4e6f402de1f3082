//! Reporting collaborator for join/leave events and lane status.

use checkout_core::{SimClock, Tick};
use checkout_lane::{Customer, LaneKind, LaneSnapshot};

use crate::IntervalSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// interval loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers never influence the
/// simulation; they only see what happened.
///
/// # Example: drop counter
///
/// ```rust,ignore
/// struct Drops(usize);
///
/// impl CheckoutObserver for Drops {
///     fn on_drop(&mut self, _tick: Tick, _customer: &Customer, _target: LaneKind) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait CheckoutObserver {
    /// Called once when [`Sim::run`][crate::Sim::run] starts.
    fn on_sim_start(&mut self, _clock: &SimClock) {}

    /// Called at the start of each interval, after the batch size is drawn
    /// and before any customer is created.
    fn on_interval_start(&mut self, _index: u64, _clock: &SimClock, _arrivals: u32) {}

    /// A customer was admitted to `lane`.
    fn on_join(&mut self, _tick: Tick, _customer: &Customer, _lane: LaneKind) {}

    /// A customer was refused by `target` and dropped for this interval.
    fn on_drop(&mut self, _tick: Tick, _customer: &Customer, _target: LaneKind) {}

    /// A customer finished checkout and left `lane`.
    fn on_depart(&mut self, _tick: Tick, _customer: &Customer, _lane: LaneKind) {}

    /// Lane status at the end of an interval.
    fn on_report(&mut self, _tick: Tick, _lanes: &[LaneSnapshot]) {}

    /// Called after `on_report` with the interval's counters.
    fn on_interval_end(&mut self, _summary: &IntervalSummary) {}

    /// Final lane status, called once on the transition to `Stopped`.
    fn on_sim_end(&mut self, _final_tick: Tick, _lanes: &[LaneSnapshot]) {}
}

/// A [`CheckoutObserver`] that does nothing.
pub struct NoopObserver;

impl CheckoutObserver for NoopObserver {}

/// Fan out every callback to both observers, left first.
impl<A: CheckoutObserver, B: CheckoutObserver> CheckoutObserver for (A, B) {
    fn on_sim_start(&mut self, clock: &SimClock) {
        self.0.on_sim_start(clock);
        self.1.on_sim_start(clock);
    }

    fn on_interval_start(&mut self, index: u64, clock: &SimClock, arrivals: u32) {
        self.0.on_interval_start(index, clock, arrivals);
        self.1.on_interval_start(index, clock, arrivals);
    }

    fn on_join(&mut self, tick: Tick, customer: &Customer, lane: LaneKind) {
        self.0.on_join(tick, customer, lane);
        self.1.on_join(tick, customer, lane);
    }

    fn on_drop(&mut self, tick: Tick, customer: &Customer, target: LaneKind) {
        self.0.on_drop(tick, customer, target);
        self.1.on_drop(tick, customer, target);
    }

    fn on_depart(&mut self, tick: Tick, customer: &Customer, lane: LaneKind) {
        self.0.on_depart(tick, customer, lane);
        self.1.on_depart(tick, customer, lane);
    }

    fn on_report(&mut self, tick: Tick, lanes: &[LaneSnapshot]) {
        self.0.on_report(tick, lanes);
        self.1.on_report(tick, lanes);
    }

    fn on_interval_end(&mut self, summary: &IntervalSummary) {
        self.0.on_interval_end(summary);
        self.1.on_interval_end(summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick, lanes: &[LaneSnapshot]) {
        self.0.on_sim_end(final_tick, lanes);
        self.1.on_sim_end(final_tick, lanes);
    }
}
