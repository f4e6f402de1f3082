//! A single checkout lane.

use checkout_core::{CustomerId, Tick};
use log::debug;

use crate::{Customer, LaneKind, LaneStatus, ServiceTimes};

/// A bounded, ordered list of customers waiting at one checkout.
///
/// Occupants are kept in arrival order and never reordered.  The only way in
/// is [`add`][Self::add], which refuses when the lane is closed or full, so
/// `occupancy() <= capacity` holds at all times.
///
/// `add` does not touch `status`; recomputing it is the job of
/// [`StatusManager::refresh_status`][crate::StatusManager::refresh_status],
/// which the intake workflow calls once after every successful add.
#[derive(Clone, Debug)]
pub struct Lane {
    pub kind:       LaneKind,
    pub capacity:   usize,
    pub status:     LaneStatus,
    pub created_at: Tick,
    customers:      Vec<Customer>,
}

impl Lane {
    pub fn new(kind: LaneKind, capacity: usize, status: LaneStatus, created_at: Tick) -> Self {
        Self {
            kind,
            capacity,
            status,
            created_at,
            customers: Vec::with_capacity(capacity),
        }
    }

    /// Current occupants in arrival order.
    #[inline]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.customers.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.customers.len() >= self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn contains(&self, id: CustomerId) -> bool {
        self.customers.iter().any(|c| c.id == id)
    }

    /// `true` iff the lane is open and has space.  The customer's own basket
    /// plays no part in admission.
    #[inline]
    pub fn can_accept(&self, _customer: &Customer) -> bool {
        self.status == LaneStatus::Open && self.customers.len() < self.capacity
    }

    /// Append `customer` at the back of the lane.
    ///
    /// On refusal the lane is untouched and the customer is handed back in
    /// `Err` so the caller decides what a rejection means.
    pub fn add(&mut self, customer: Customer) -> Result<(), Customer> {
        if !self.can_accept(&customer) {
            return Err(customer);
        }
        debug!("{} joined {} ({} items)", customer.id, self.kind, customer.items);
        self.customers.push(customer);
        Ok(())
    }

    /// Remove every customer whose checkout has finished by `now`.
    ///
    /// Every occupant present at the start of the sweep is tested exactly
    /// once; several may leave in the same sweep.  Departed customers are
    /// returned in their original lane order.  Status is left as is.
    pub fn sweep_departures(&mut self, now: Tick, times: &ServiceTimes) -> Vec<Customer> {
        if self.customers.is_empty() {
            return vec![];
        }
        let (departed, staying): (Vec<Customer>, Vec<Customer>) = self
            .customers
            .drain(..)
            .partition(|c| c.is_done(now, times));
        self.customers = staying;

        for c in &departed {
            debug!("{} completed checkout and left {} at {now}", c.id, self.kind);
        }
        departed
    }
}
