//! `checkout-sim` — interval runner for the checkout lane simulator.
//!
//! # Interval loop
//!
//! ```text
//! while Running:
//!   ① Arrivals — draw a batch size; for each new customer:
//!                  target = policy.assign(customer, lanes)
//!                  admit(customer, target)   → on_join / on_drop
//!   ② Sweeps   — for each tick in the interval: advance the clock, then
//!                sweep every lane for finished checkouts → on_depart
//!   ③ Report   — snapshot every lane → on_report
//!   ④ Ask      — StopSignal::should_stop → Stopped (terminal)
//! on Stopped: final snapshot → on_sim_end
//! ```
//!
//! Everything runs sequentially on the caller's thread.  The stop signal is
//! only consulted between intervals.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use checkout_core::CheckoutConfig;
//! use checkout_sim::{NoopObserver, SimBuilder, StopAfter};
//!
//! let mut sim = SimBuilder::new(CheckoutConfig::default()).build()?;
//! let summary = sim.run(&mut NoopObserver, &mut StopAfter(10))?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stop;
pub mod summary;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CheckoutObserver, NoopObserver};
pub use sim::{RunState, Sim};
pub use stop::{StopAfter, StopSignal};
pub use summary::{IntervalSummary, RunSummary};
