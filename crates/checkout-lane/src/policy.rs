//! The `AssignmentPolicy` trait — decides which lane a new customer targets.

use crate::{Customer, LaneKind, LaneSet, ServiceTimes, StatusManager};

/// Pluggable lane assignment.
///
/// `assign` only picks a target; whether the customer actually gets in is
/// decided afterwards by [`StatusManager::admit`].  A policy may mutate lane
/// status (e.g. open a lane) but never adds or removes customers.
pub trait AssignmentPolicy {
    fn assign(&self, customer: &Customer, lanes: &mut LaneSet) -> LaneKind;
}

/// Small baskets to self-service; large baskets to the first cashier lane
/// with space.
///
/// ```text
/// items < threshold                 → Self Service (even if full or closed)
/// first regular lane below capacity → that lane (open or not)
/// first regular lane at capacity    → open the next lane, target this one
/// no regular lanes                  → Self Service
/// ```
///
/// The third rule targets a lane that is already full, so the following
/// admit fails and the customer is dropped for the interval.  Because the
/// second rule ignores status, that branch only runs when every regular lane
/// is full, so the lane just opened is full as well.
#[derive(Copy, Clone, Debug, Default)]
pub struct CapacityFirstPolicy {
    pub times: ServiceTimes,
}

impl CapacityFirstPolicy {
    pub fn new(times: ServiceTimes) -> Self {
        Self { times }
    }
}

impl AssignmentPolicy for CapacityFirstPolicy {
    fn assign(&self, customer: &Customer, lanes: &mut LaneSet) -> LaneKind {
        if !self.times.is_cashier_basket(customer.items) {
            return LaneKind::SelfService;
        }

        if let Some(lane) = lanes
            .regular()
            .find(|l| l.occupancy() < l.capacity && !l.contains(customer.id))
        {
            return lane.kind;
        }

        let full = lanes.regular().find(|l| l.occupancy() == l.capacity).map(|l| l.kind);
        if let Some(kind) = full {
            StatusManager::new(lanes).open_next_regular(kind);
            return kind;
        }

        LaneKind::SelfService
    }
}
