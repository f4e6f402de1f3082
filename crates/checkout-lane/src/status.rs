//! Lane status management and status snapshots.
//!
//! # Status model
//!
//! A lane's status is recomputed from its occupancy rather than tracked as
//! independent truth:
//!
//! ```text
//! occupancy == capacity → open the next regular lane (own status untouched)
//! occupancy == 0        → Closed
//! otherwise             → Open
//! ```
//!
//! The one call site that must keep `Lane::status` fresh is
//! [`StatusManager::admit`], which refreshes after every successful add.
//! Recomputation is deterministic, so refreshing twice in a row is a no-op.

use checkout_core::CustomerId;
use log::debug;

use crate::{Customer, Lane, LaneError, LaneKind, LaneResult, LaneSet, LaneStatus};

// ── LaneSnapshot ──────────────────────────────────────────────────────────────

/// Read-only view of one lane, handed to reporters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneSnapshot {
    pub kind:      LaneKind,
    pub status:    LaneStatus,
    pub capacity:  usize,
    /// `(id, items)` for each occupant, in lane order.
    pub customers: Vec<(CustomerId, u32)>,
}

impl LaneSnapshot {
    pub fn of(lane: &Lane) -> Self {
        Self {
            kind:      lane.kind,
            status:    lane.status,
            capacity:  lane.capacity,
            customers: lane.customers().iter().map(|c| (c.id, c.items)).collect(),
        }
    }

    /// Snapshot every lane in scan order.
    pub fn capture(lanes: &LaneSet) -> Vec<LaneSnapshot> {
        lanes.iter().map(LaneSnapshot::of).collect()
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.customers.len()
    }
}

// ── StatusManager ─────────────────────────────────────────────────────────────

/// Keeps lane status consistent with occupancy and opens extra cashier
/// lanes under pressure.
///
/// Borrows the lane set for as long as it lives; it owns no lanes and holds
/// no state of its own.
pub struct StatusManager<'a> {
    lanes: &'a mut LaneSet,
}

impl<'a> StatusManager<'a> {
    #[inline]
    pub fn new(lanes: &'a mut LaneSet) -> Self {
        Self { lanes }
    }

    /// Recompute the status of `kind` from its occupancy.
    ///
    /// A full lane keeps its own status and opens the next regular lane.
    pub fn refresh_status(&mut self, kind: LaneKind) -> LaneResult<()> {
        let lane = self.lanes.get_mut(kind).ok_or(LaneError::UnknownLane(kind))?;
        if lane.occupancy() == lane.capacity {
            self.open_next_regular(kind);
        } else if lane.is_empty() {
            lane.status = LaneStatus::Closed;
        } else {
            lane.status = LaneStatus::Open;
        }
        Ok(())
    }

    /// Open the regular lane numbered one above `current`.
    ///
    /// Returns the kind of the lane that is now open, or `None` if there is
    /// no such lane (past the last regular lane, or `current` is
    /// self-service).  Never closes a lane and never moves customers.
    pub fn open_next_regular(&mut self, current: LaneKind) -> Option<LaneKind> {
        let next = current.next_regular()?;
        let lane = self.lanes.get_mut(next)?;
        if lane.status != LaneStatus::Open {
            debug!("{current} is full, opening {next}");
        }
        lane.status = LaneStatus::Open;
        Some(next)
    }

    /// Add `customer` to the `target` lane and refresh its status.
    ///
    /// On refusal (lane closed, full, or not part of this store) nothing
    /// changes and the customer is handed back in `Err`.
    pub fn admit(&mut self, customer: Customer, target: LaneKind) -> Result<(), Customer> {
        let Some(lane) = self.lanes.get_mut(target) else {
            return Err(customer);
        };
        lane.add(customer)?;
        let refreshed = self.refresh_status(target);
        debug_assert!(refreshed.is_ok(), "lane {target} vanished after add");
        Ok(())
    }

    /// Snapshot of every lane for the reporting collaborator.
    pub fn report(&self) -> Vec<LaneSnapshot> {
        LaneSnapshot::capture(self.lanes)
    }
}
