//! Fluent builder for constructing a [`Sim`].

use checkout_core::{CheckoutConfig, SimRng, Tick};
use checkout_lane::{AssignmentPolicy, CapacityFirstPolicy, CustomerGenerator, LaneSet, ServiceTimes};

use crate::{RunState, RunSummary, Sim, SimResult};

/// Child-RNG offsets, fixed so a seed always maps to the same streams.
const CUSTOMER_STREAM: u64 = 1;
const ARRIVAL_STREAM:  u64 = 2;

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                        |
/// |-------------------|------------------------------------------------|
/// | `.policy(p)`      | `CapacityFirstPolicy` with the config's times  |
/// | `.lanes(set)`     | `LaneSet::from_config(&config, Tick(0))`       |
/// | `.realtime(bool)` | `false`: ticks advance without waiting         |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .realtime(true)
///     .build()?;
/// sim.run(&mut reporter, &mut prompt)?;
/// ```
pub struct SimBuilder<P: AssignmentPolicy = CapacityFirstPolicy> {
    config:   CheckoutConfig,
    policy:   P,
    lanes:    Option<LaneSet>,
    realtime: bool,
}

impl SimBuilder<CapacityFirstPolicy> {
    pub fn new(config: CheckoutConfig) -> Self {
        let policy = CapacityFirstPolicy::new(ServiceTimes::from_config(&config));
        Self { config, policy, lanes: None, realtime: false }
    }
}

impl<P: AssignmentPolicy> SimBuilder<P> {
    /// Replace the assignment policy.
    pub fn policy<Q: AssignmentPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config:   self.config,
            policy,
            lanes:    self.lanes,
            realtime: self.realtime,
        }
    }

    /// Start from a pre-built lane set instead of the config's layout.
    pub fn lanes(mut self, lanes: LaneSet) -> Self {
        self.lanes = Some(lanes);
        self
    }

    /// Pace ticks in real time (one `tick_duration_secs` sleep per tick).
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Validate the config, build the lanes and RNG streams, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let lanes = match self.lanes {
            Some(lanes) => lanes,
            None => LaneSet::from_config(&self.config, Tick::ZERO)?,
        };

        let mut root = SimRng::new(self.config.seed);
        let generator = CustomerGenerator::from_config(&self.config, root.child(CUSTOMER_STREAM));
        let arrivals_rng = root.child(ARRIVAL_STREAM);

        Ok(Sim {
            clock:    self.config.make_clock()?,
            times:    ServiceTimes::from_config(&self.config),
            config:   self.config,
            lanes,
            generator,
            policy:   self.policy,
            arrivals_rng,
            realtime: self.realtime,
            state:    RunState::Running,
            totals:   RunSummary::default(),
        })
    }
}
