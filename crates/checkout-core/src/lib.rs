//! `checkout-core` — foundational types for the checkout lane simulator.
//!
//! This crate is a dependency of every other `checkout-*` crate.  It has no
//! `checkout-*` dependencies and minimal external ones (`chrono`, `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `CustomerIds` (the id counter)          |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `CheckoutConfig`                                      |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `CheckoutConfig` from a JSON file.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CheckoutConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, CustomerIds};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
