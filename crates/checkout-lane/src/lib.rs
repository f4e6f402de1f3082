//! `checkout-lane` — customers, lanes, and the decisions made about them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`customer`]  | `Customer`, `ServiceTimes`, `CustomerGenerator`              |
//! | [`kind`]      | `LaneKind` (`Regular N` / `Self Service`), `LaneStatus`      |
//! | [`lane`]      | `Lane` — bounded, ordered occupant list with admission rules |
//! | [`set`]       | `LaneSet` — the fixed collection of lanes built at startup   |
//! | [`status`]    | `StatusManager`, `LaneSnapshot`                              |
//! | [`policy`]    | `AssignmentPolicy` trait, `CapacityFirstPolicy`              |
//! | [`error`]     | `LaneError`, `LaneResult<T>`                                 |
//!
//! # Intake workflow
//!
//! ```text
//! customer  = generator.create_customer(now)
//! target    = policy.assign(&customer, &mut lanes)      // may open a lane
//! StatusManager::new(&mut lanes).admit(customer, target) // add + refresh_status
//! ```
//!
//! Departures are driven separately by [`Lane::sweep_departures`].  Status is
//! only recomputed after a successful add; a sweep never closes a lane.

pub mod customer;
pub mod error;
pub mod kind;
pub mod lane;
pub mod policy;
pub mod set;
pub mod status;

#[cfg(test)]
mod tests;

pub use customer::{Customer, CustomerGenerator, ServiceTimes};
pub use error::{LaneError, LaneResult};
pub use kind::{LaneKind, LaneStatus};
pub use lane::Lane;
pub use policy::{AssignmentPolicy, CapacityFirstPolicy};
pub use set::LaneSet;
pub use status::{LaneSnapshot, StatusManager};
