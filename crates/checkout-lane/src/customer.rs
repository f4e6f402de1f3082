//! Customers, the checkout-time rule, and the generator that creates them.

use checkout_core::{CheckoutConfig, CustomerId, CustomerIds, SimRng, Tick};

/// A shopper with a fixed basket, stamped with the tick they arrived.
///
/// All fields are fixed at creation.  A customer lives in at most one
/// [`Lane`][crate::Lane] and is dropped once their checkout completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Customer {
    pub id:         CustomerId,
    pub items:      u32,
    pub arrived_at: Tick,
}

impl Customer {
    pub fn new(id: CustomerId, items: u32, arrived_at: Tick) -> Self {
        Self { id, items, arrived_at }
    }

    /// Checkout duration in seconds under `times`.
    #[inline]
    pub fn checkout_duration(&self, times: &ServiceTimes) -> u64 {
        times.duration_secs(self.items)
    }

    /// `true` once at least `checkout_duration` has elapsed since arrival.
    ///
    /// A zero-length checkout is due on the first sweep at or after arrival.
    pub fn is_done(&self, now: Tick, times: &ServiceTimes) -> bool {
        let elapsed_secs = now.since(self.arrived_at) * times.tick_duration_secs as u64;
        elapsed_secs >= self.checkout_duration(times)
    }
}

// ── ServiceTimes ──────────────────────────────────────────────────────────────

/// The service-time policy: seconds per item on either side of the threshold.
///
/// The same `item_threshold` drives assignment, so a basket that is timed as
/// a cashier checkout is always routed to a cashier lane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ServiceTimes {
    pub cashier_secs_per_item:      u64,
    pub self_service_secs_per_item: u64,
    pub item_threshold:             u32,
    pub tick_duration_secs:         u32,
}

impl ServiceTimes {
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self {
            cashier_secs_per_item:      config.cashier_secs_per_item,
            self_service_secs_per_item: config.self_service_secs_per_item,
            item_threshold:             config.item_threshold,
            tick_duration_secs:         config.tick_duration_secs,
        }
    }

    /// `items × cashier rate` at or above the threshold, else `items × self-service rate`.
    #[inline]
    pub fn duration_secs(&self, items: u32) -> u64 {
        if items >= self.item_threshold {
            items as u64 * self.cashier_secs_per_item
        } else {
            items as u64 * self.self_service_secs_per_item
        }
    }

    /// `true` if a basket of `items` belongs in a cashier lane.
    #[inline]
    pub fn is_cashier_basket(&self, items: u32) -> bool {
        items >= self.item_threshold
    }
}

impl Default for ServiceTimes {
    fn default() -> Self {
        Self::from_config(&CheckoutConfig::default())
    }
}

// ── CustomerGenerator ─────────────────────────────────────────────────────────

/// Creates customers with sequential identifiers and random basket sizes.
///
/// Owns both the identifier counter and its RNG, so two generators never
/// share state and the customer stream is reproducible from the seed.
pub struct CustomerGenerator {
    ids:       CustomerIds,
    rng:       SimRng,
    min_items: u32,
    max_items: u32,
}

impl CustomerGenerator {
    /// Basket sizes are drawn uniformly from `min_items..=max_items`.
    pub fn new(rng: SimRng, min_items: u32, max_items: u32) -> Self {
        debug_assert!(min_items <= max_items);
        Self { ids: CustomerIds::new(), rng, min_items, max_items }
    }

    pub fn from_config(config: &CheckoutConfig, rng: SimRng) -> Self {
        Self::new(rng, config.min_items, config.max_items)
    }

    /// Create the next customer, arriving at `now`.
    pub fn create_customer(&mut self, now: Tick) -> Customer {
        let id = self.ids.next_id();
        let items = self.rng.gen_range(self.min_items..=self.max_items);
        Customer::new(id, items, now)
    }

    /// Number of customers created so far.
    #[inline]
    pub fn created(&self) -> u32 {
        self.ids.issued()
    }
}
