//! The fixed collection of lanes in one store.

use checkout_core::{CheckoutConfig, Tick};

use crate::{Lane, LaneError, LaneKind, LaneResult, LaneStatus};

/// Every lane in the store, regular lanes first in ascending number, then
/// self-service.
///
/// Lanes are created once and never added or removed; only their occupants
/// and status change.
#[derive(Clone, Debug, Default)]
pub struct LaneSet {
    lanes: Vec<Lane>,
}

impl LaneSet {
    /// Build from explicit lanes.  Lanes are sorted into scan order.
    pub fn new(mut lanes: Vec<Lane>) -> Self {
        lanes.sort_by_key(|l| l.kind);
        Self { lanes }
    }

    /// Build the store layout described by `config`.
    ///
    /// Lanes listed in `config.initially_open` start `Open`, the rest
    /// `Closed`.  Returns [`LaneError::MalformedLaneName`] for an
    /// unparseable name and [`LaneError::UnknownLane`] for a well-formed
    /// name that is not part of this layout.  More than 255 regular lanes
    /// is [`LaneError::TooManyRegularLanes`].
    pub fn from_config(config: &CheckoutConfig, now: Tick) -> LaneResult<Self> {
        let count = u8::try_from(config.regular_lanes)
            .map_err(|_| LaneError::TooManyRegularLanes(config.regular_lanes))?;
        let mut lanes: Vec<Lane> = (1..=count)
            .map(|n| Lane::new(LaneKind::Regular(n), config.regular_capacity, LaneStatus::Closed, now))
            .collect();
        lanes.push(Lane::new(
            LaneKind::SelfService,
            config.self_service_capacity,
            LaneStatus::Closed,
            now,
        ));

        let mut set = Self::new(lanes);
        for name in &config.initially_open {
            let kind: LaneKind = name.parse()?;
            set.get_mut(kind).ok_or(LaneError::UnknownLane(kind))?.status = LaneStatus::Open;
        }
        Ok(set)
    }

    pub fn get(&self, kind: LaneKind) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.kind == kind)
    }

    pub fn get_mut(&mut self, kind: LaneKind) -> Option<&mut Lane> {
        self.lanes.iter_mut().find(|l| l.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lane> {
        self.lanes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Lane> {
        self.lanes.iter_mut()
    }

    /// Regular lanes in ascending number.
    pub fn regular(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter().filter(|l| l.kind.is_regular())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Total customers across all lanes.
    pub fn occupancy(&self) -> usize {
        self.lanes.iter().map(Lane::occupancy).sum()
    }
}

impl<'a> IntoIterator for &'a LaneSet {
    type Item = &'a Lane;
    type IntoIter = std::slice::Iter<'a, Lane>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}
