//! Stop-signal collaborator, consulted once after every interval.

use crate::IntervalSummary;

/// Decides whether the run ends after the interval just completed.
///
/// Any `FnMut(&IntervalSummary) -> bool` closure is a `StopSignal`, so an
/// interactive prompt or a test script can be injected without the runner
/// reading stdin itself.
pub trait StopSignal {
    /// `true` transitions the simulation to `Stopped`.
    fn should_stop(&mut self, completed: &IntervalSummary) -> bool;
}

impl<F: FnMut(&IntervalSummary) -> bool> StopSignal for F {
    fn should_stop(&mut self, completed: &IntervalSummary) -> bool {
        self(completed)
    }
}

/// Stop once `n` intervals have completed (at least one always runs).
#[derive(Copy, Clone, Debug)]
pub struct StopAfter(pub u64);

impl StopSignal for StopAfter {
    fn should_stop(&mut self, completed: &IntervalSummary) -> bool {
        completed.index + 1 >= self.0
    }
}
