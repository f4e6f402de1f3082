//! Unit tests for checkout-lane.

use checkout_core::{CheckoutConfig, CustomerId, Tick};

use crate::{Customer, Lane, LaneKind, LaneSet, LaneStatus, ServiceTimes};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cust(id: u32, items: u32, at: u64) -> Customer {
    Customer::new(CustomerId(id), items, Tick(at))
}

fn default_lanes() -> LaneSet {
    LaneSet::from_config(&CheckoutConfig::default(), Tick::ZERO).unwrap()
}

/// Fill `kind` up to `n` occupants with large baskets, ids starting at `first_id`.
fn fill(lanes: &mut LaneSet, kind: LaneKind, n: usize, first_id: u32) {
    let lane = lanes.get_mut(kind).unwrap();
    let status = lane.status;
    lane.status = LaneStatus::Open;
    for i in 0..n as u32 {
        lane.add(cust(first_id + i, 20, 0)).unwrap();
    }
    lane.status = status;
}

// ── LaneKind parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod kind {
    use super::*;
    use crate::LaneError;

    #[test]
    fn parses_and_displays() {
        assert_eq!("Regular 3".parse::<LaneKind>().unwrap(), LaneKind::Regular(3));
        assert_eq!("Self Service".parse::<LaneKind>().unwrap(), LaneKind::SelfService);
        assert_eq!(LaneKind::Regular(3).to_string(), "Regular 3");
        assert_eq!(LaneKind::SelfService.to_string(), "Self Service");
    }

    #[test]
    fn malformed_suffix_is_an_error() {
        for bad in ["Regular", "Regular x", "Regular 0", "Regular3", "Regular -1", "Express 1"] {
            match bad.parse::<LaneKind>() {
                Err(LaneError::MalformedLaneName(name)) => assert_eq!(name, bad),
                other => panic!("{bad:?} should be malformed, got {other:?}"),
            }
        }
    }

    #[test]
    fn regular_lanes_sort_before_self_service() {
        let mut kinds = vec![LaneKind::SelfService, LaneKind::Regular(2), LaneKind::Regular(1)];
        kinds.sort();
        assert_eq!(kinds, [LaneKind::Regular(1), LaneKind::Regular(2), LaneKind::SelfService]);
    }

    #[test]
    fn next_regular() {
        assert_eq!(LaneKind::Regular(1).next_regular(), Some(LaneKind::Regular(2)));
        assert_eq!(LaneKind::Regular(u8::MAX).next_regular(), None);
        assert_eq!(LaneKind::SelfService.next_regular(), None);
    }
}

// ── Customer & generator ──────────────────────────────────────────────────────

#[cfg(test)]
mod customer {
    use super::*;
    use checkout_core::SimRng;

    use crate::CustomerGenerator;

    #[test]
    fn duration_rule() {
        let times = ServiceTimes::default();
        assert_eq!(cust(1, 10, 0).checkout_duration(&times), 40);
        assert_eq!(cust(1, 30, 0).checkout_duration(&times), 120);
        assert_eq!(cust(1, 9, 0).checkout_duration(&times), 54);
        assert_eq!(cust(1, 1, 0).checkout_duration(&times), 6);
    }

    #[test]
    fn ten_items_done_at_forty_ticks() {
        let times = ServiceTimes::default();
        let c = cust(1, 10, 7);
        assert!(!c.is_done(Tick(7 + 39), &times));
        assert!(c.is_done(Tick(7 + 40), &times));
    }

    #[test]
    fn tick_duration_scales_elapsed_time() {
        let times = ServiceTimes { tick_duration_secs: 10, ..ServiceTimes::default() };
        let c = cust(1, 10, 0); // 40 s → due after 4 ticks of 10 s
        assert!(!c.is_done(Tick(3), &times));
        assert!(c.is_done(Tick(4), &times));
    }

    #[test]
    fn generated_items_in_range_and_ids_increase() {
        let mut generator = CustomerGenerator::new(SimRng::new(3), 1, 30);
        let mut last = CustomerId(0);
        for _ in 0..500 {
            let c = generator.create_customer(Tick(12));
            assert!((1..=30).contains(&c.items));
            assert!(c.id > last);
            assert_eq!(c.arrived_at, Tick(12));
            last = c.id;
        }
        assert_eq!(generator.created(), 500);
    }

    #[test]
    fn generator_is_reproducible() {
        let mut a = CustomerGenerator::new(SimRng::new(11), 1, 30);
        let mut b = CustomerGenerator::new(SimRng::new(11), 1, 30);
        for _ in 0..50 {
            assert_eq!(a.create_customer(Tick(0)), b.create_customer(Tick(0)));
        }
    }
}

// ── Lane ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lane {
    use super::*;

    fn open_lane(capacity: usize) -> Lane {
        Lane::new(LaneKind::Regular(1), capacity, LaneStatus::Open, Tick::ZERO)
    }

    #[test]
    fn closed_lane_refuses() {
        let mut lane = Lane::new(LaneKind::Regular(2), 5, LaneStatus::Closed, Tick::ZERO);
        let c = cust(1, 12, 0);
        assert!(!lane.can_accept(&c));
        let back = lane.add(c).unwrap_err();
        assert_eq!(back, c);
        assert!(lane.is_empty());
    }

    #[test]
    fn full_lane_refuses_without_mutation() {
        let mut lane = open_lane(2);
        lane.add(cust(1, 12, 0)).unwrap();
        lane.add(cust(2, 12, 0)).unwrap();
        assert!(lane.is_full());
        assert!(lane.add(cust(3, 12, 0)).is_err());
        assert_eq!(lane.occupancy(), 2);
        assert!(!lane.contains(CustomerId(3)));
    }

    #[test]
    fn add_keeps_arrival_order() {
        let mut lane = open_lane(5);
        for id in [4, 2, 9] {
            lane.add(cust(id, 12, 0)).unwrap();
        }
        let ids: Vec<u32> = lane.customers().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, [4, 2, 9]);
    }

    #[test]
    fn add_does_not_touch_status() {
        let mut lane = open_lane(1);
        lane.add(cust(1, 12, 0)).unwrap();
        assert_eq!(lane.status, LaneStatus::Open);
    }

    #[test]
    fn sweep_removes_due_customers_once() {
        let times = ServiceTimes::default();
        let mut lane = open_lane(5);
        lane.add(cust(1, 10, 0)).unwrap(); // due at 40
        lane.add(cust(2, 20, 0)).unwrap(); // due at 80
        lane.add(cust(3, 11, 0)).unwrap(); // due at 44

        assert!(lane.sweep_departures(Tick(39), &times).is_empty());

        let gone = lane.sweep_departures(Tick(44), &times);
        let ids: Vec<u32> = gone.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, [1, 3]);
        assert_eq!(lane.occupancy(), 1);

        assert!(lane.sweep_departures(Tick(45), &times).is_empty());
        assert_eq!(lane.sweep_departures(Tick(80), &times).len(), 1);
        assert!(lane.is_empty());
    }

    #[test]
    fn sweep_leaves_status_alone() {
        let times = ServiceTimes::default();
        let mut lane = open_lane(5);
        lane.add(cust(1, 1, 0)).unwrap();
        lane.sweep_departures(Tick(100), &times);
        assert!(lane.is_empty());
        assert_eq!(lane.status, LaneStatus::Open);
    }

    #[test]
    fn zero_item_customer_leaves_on_next_sweep() {
        let times = ServiceTimes::default();
        let mut lane = Lane::new(LaneKind::SelfService, 15, LaneStatus::Open, Tick::ZERO);
        lane.add(cust(1, 0, 5)).unwrap();
        assert_eq!(lane.sweep_departures(Tick(6), &times).len(), 1);
    }
}

// ── LaneSet ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod set {
    use super::*;
    use crate::LaneError;

    #[test]
    fn default_layout() {
        let lanes = default_lanes();
        assert_eq!(lanes.len(), 6);
        let kinds: Vec<LaneKind> = lanes.iter().map(|l| l.kind).collect();
        assert_eq!(kinds[0], LaneKind::Regular(1));
        assert_eq!(kinds[4], LaneKind::Regular(5));
        assert_eq!(kinds[5], LaneKind::SelfService);

        assert_eq!(lanes.get(LaneKind::Regular(1)).unwrap().status, LaneStatus::Open);
        assert_eq!(lanes.get(LaneKind::Regular(2)).unwrap().status, LaneStatus::Closed);
        assert_eq!(lanes.get(LaneKind::SelfService).unwrap().status, LaneStatus::Open);
        assert_eq!(lanes.get(LaneKind::Regular(1)).unwrap().capacity, 5);
        assert_eq!(lanes.get(LaneKind::SelfService).unwrap().capacity, 15);
    }

    #[test]
    fn too_many_regular_lanes_rejected() {
        let config = CheckoutConfig { regular_lanes: 256, ..Default::default() };
        assert!(matches!(
            LaneSet::from_config(&config, Tick::ZERO),
            Err(LaneError::TooManyRegularLanes(256))
        ));

        let config = CheckoutConfig { regular_lanes: 255, ..Default::default() };
        let lanes = LaneSet::from_config(&config, Tick::ZERO).unwrap();
        assert_eq!(lanes.regular().last().unwrap().kind, LaneKind::Regular(255));
    }

    #[test]
    fn malformed_initially_open_name() {
        let config = CheckoutConfig {
            initially_open: vec!["Regular one".into()],
            ..Default::default()
        };
        assert!(matches!(
            LaneSet::from_config(&config, Tick::ZERO),
            Err(LaneError::MalformedLaneName(_))
        ));
    }

    #[test]
    fn unknown_initially_open_lane() {
        let config = CheckoutConfig {
            initially_open: vec!["Regular 9".into()],
            ..Default::default()
        };
        assert!(matches!(
            LaneSet::from_config(&config, Tick::ZERO),
            Err(LaneError::UnknownLane(LaneKind::Regular(9)))
        ));
    }

    #[test]
    fn new_sorts_into_scan_order() {
        let lanes = LaneSet::new(vec![
            Lane::new(LaneKind::SelfService, 15, LaneStatus::Open, Tick::ZERO),
            Lane::new(LaneKind::Regular(2), 5, LaneStatus::Closed, Tick::ZERO),
            Lane::new(LaneKind::Regular(1), 5, LaneStatus::Open, Tick::ZERO),
        ]);
        let kinds: Vec<LaneKind> = lanes.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LaneKind::Regular(1), LaneKind::Regular(2), LaneKind::SelfService]);
    }
}

// ── StatusManager ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;
    use crate::{LaneError, LaneSnapshot, StatusManager};

    #[test]
    fn filling_a_lane_opens_the_next() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::Regular(1), 4, 100);

        let mut mgr = StatusManager::new(&mut lanes);
        mgr.admit(cust(1, 12, 0), LaneKind::Regular(1)).unwrap();

        let r1 = lanes.get(LaneKind::Regular(1)).unwrap();
        assert_eq!(r1.occupancy(), 5);
        assert_eq!(r1.status, LaneStatus::Open);
        assert_eq!(lanes.get(LaneKind::Regular(2)).unwrap().status, LaneStatus::Open);
        assert_eq!(lanes.get(LaneKind::Regular(3)).unwrap().status, LaneStatus::Closed);
    }

    #[test]
    fn refresh_derives_open_and_closed() {
        let mut lanes = default_lanes();
        lanes.get_mut(LaneKind::Regular(1)).unwrap().status = LaneStatus::Open;
        StatusManager::new(&mut lanes).refresh_status(LaneKind::Regular(1)).unwrap();
        assert_eq!(lanes.get(LaneKind::Regular(1)).unwrap().status, LaneStatus::Closed);

        fill(&mut lanes, LaneKind::Regular(3), 2, 1);
        StatusManager::new(&mut lanes).refresh_status(LaneKind::Regular(3)).unwrap();
        assert_eq!(lanes.get(LaneKind::Regular(3)).unwrap().status, LaneStatus::Open);
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::Regular(1), 5, 1);
        fill(&mut lanes, LaneKind::Regular(2), 3, 10);

        let mut mgr = StatusManager::new(&mut lanes);
        for kind in [LaneKind::Regular(1), LaneKind::Regular(2), LaneKind::Regular(4)] {
            mgr.refresh_status(kind).unwrap();
        }
        let first = mgr.report();
        for kind in [LaneKind::Regular(1), LaneKind::Regular(2), LaneKind::Regular(4)] {
            mgr.refresh_status(kind).unwrap();
        }
        assert_eq!(mgr.report(), first);
    }

    #[test]
    fn refresh_unknown_lane() {
        let mut lanes = default_lanes();
        assert!(matches!(
            StatusManager::new(&mut lanes).refresh_status(LaneKind::Regular(6)),
            Err(LaneError::UnknownLane(LaneKind::Regular(6)))
        ));
    }

    #[test]
    fn open_past_last_regular_is_noop() {
        let mut lanes = default_lanes();
        let before = LaneSnapshot::capture(&lanes);
        assert_eq!(StatusManager::new(&mut lanes).open_next_regular(LaneKind::Regular(5)), None);
        assert_eq!(LaneSnapshot::capture(&lanes), before);
    }

    #[test]
    fn open_after_self_service_is_noop() {
        let mut lanes = default_lanes();
        let before = LaneSnapshot::capture(&lanes);
        assert_eq!(StatusManager::new(&mut lanes).open_next_regular(LaneKind::SelfService), None);
        assert_eq!(LaneSnapshot::capture(&lanes), before);
    }

    #[test]
    fn open_never_closes_or_moves() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::Regular(3), 2, 1);
        lanes.get_mut(LaneKind::Regular(3)).unwrap().status = LaneStatus::Open;
        let opened = StatusManager::new(&mut lanes).open_next_regular(LaneKind::Regular(2));
        assert_eq!(opened, Some(LaneKind::Regular(3)));
        let r3 = lanes.get(LaneKind::Regular(3)).unwrap();
        assert_eq!(r3.status, LaneStatus::Open);
        assert_eq!(r3.occupancy(), 2);
    }

    #[test]
    fn self_service_fills_to_capacity() {
        let mut lanes = default_lanes();
        let ss = lanes.get_mut(LaneKind::SelfService).unwrap();
        for i in 0..14 {
            ss.add(cust(100 + i, 3, 0)).unwrap();
        }

        StatusManager::new(&mut lanes).admit(cust(1, 3, 0), LaneKind::SelfService).unwrap();
        let ss = lanes.get(LaneKind::SelfService).unwrap();
        assert_eq!(ss.occupancy(), 15);
        assert_eq!(ss.status, LaneStatus::Open);

        let rejected = StatusManager::new(&mut lanes).admit(cust(2, 3, 0), LaneKind::SelfService);
        assert_eq!(rejected.unwrap_err().id, CustomerId(2));
    }

    #[test]
    fn admit_to_missing_lane_hands_customer_back() {
        let config = CheckoutConfig { regular_lanes: 0, initially_open: vec![], ..Default::default() };
        let mut lanes = LaneSet::from_config(&config, Tick::ZERO).unwrap();
        let back = StatusManager::new(&mut lanes).admit(cust(1, 12, 0), LaneKind::Regular(1));
        assert_eq!(back.unwrap_err().id, CustomerId(1));
    }

    #[test]
    fn report_lists_occupants_in_order() {
        let mut lanes = default_lanes();
        StatusManager::new(&mut lanes).admit(cust(1, 12, 0), LaneKind::Regular(1)).unwrap();
        StatusManager::new(&mut lanes).admit(cust(2, 15, 0), LaneKind::Regular(1)).unwrap();
        let report = StatusManager::new(&mut lanes).report();
        assert_eq!(report.len(), 6);
        assert_eq!(report[0].kind, LaneKind::Regular(1));
        assert_eq!(report[0].occupancy(), 2);
        assert_eq!(report[0].customers, [(CustomerId(1), 12), (CustomerId(2), 15)]);
        assert_eq!(report[1].occupancy(), 0);
        assert_eq!(report[1].status, LaneStatus::Closed);
    }
}

// ── Assignment policy ─────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use super::*;
    use crate::{AssignmentPolicy, CapacityFirstPolicy, StatusManager};

    fn policy() -> CapacityFirstPolicy {
        CapacityFirstPolicy::default()
    }

    #[test]
    fn small_basket_goes_to_self_service() {
        let mut lanes = default_lanes();
        for items in 1..10 {
            assert_eq!(policy().assign(&cust(1, items, 0), &mut lanes), LaneKind::SelfService);
        }
    }

    #[test]
    fn small_basket_goes_to_self_service_even_when_full() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::SelfService, 15, 100);
        assert_eq!(policy().assign(&cust(1, 2, 0), &mut lanes), LaneKind::SelfService);
    }

    #[test]
    fn large_basket_never_targets_self_service_while_cashiers_have_space() {
        let mut lanes = default_lanes();
        for items in 10..=30 {
            let target = policy().assign(&cust(1, items, 0), &mut lanes);
            assert_eq!(target, LaneKind::Regular(1));
        }
    }

    #[test]
    fn first_regular_lane_with_space_wins() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::Regular(1), 5, 100);
        fill(&mut lanes, LaneKind::Regular(2), 5, 200);
        assert_eq!(policy().assign(&cust(1, 12, 0), &mut lanes), LaneKind::Regular(3));
    }

    #[test]
    fn closed_lane_with_space_is_still_targeted() {
        let mut lanes = default_lanes();
        fill(&mut lanes, LaneKind::Regular(1), 5, 100);
        // Regular 2 is still Closed (fill bypasses refresh).
        assert_eq!(policy().assign(&cust(1, 12, 0), &mut lanes), LaneKind::Regular(2));
    }

    #[test]
    fn all_full_targets_first_full_lane_and_drops() {
        let mut lanes = default_lanes();
        for n in 1..=5u8 {
            fill(&mut lanes, LaneKind::Regular(n), 5, n as u32 * 100);
        }
        fill(&mut lanes, LaneKind::SelfService, 15, 1_000);

        let c = cust(1, 15, 0);
        let target = policy().assign(&c, &mut lanes);
        assert_eq!(target, LaneKind::Regular(1));
        assert_eq!(lanes.get(LaneKind::Regular(2)).unwrap().status, LaneStatus::Open);

        assert!(StatusManager::new(&mut lanes).admit(c, target).is_err());
        assert!(lanes.iter().all(|l| !l.contains(CustomerId(1))));
        assert!(lanes.iter().all(|l| l.occupancy() <= l.capacity));
    }

    #[test]
    fn no_regular_lanes_falls_back_to_self_service() {
        let config = CheckoutConfig {
            regular_lanes:  0,
            initially_open: vec!["Self Service".into()],
            ..Default::default()
        };
        let mut lanes = LaneSet::from_config(&config, Tick::ZERO).unwrap();
        assert_eq!(policy().assign(&cust(1, 25, 0), &mut lanes), LaneKind::SelfService);
    }

    #[test]
    fn threshold_follows_service_times() {
        let times = ServiceTimes { item_threshold: 20, ..ServiceTimes::default() };
        let mut lanes = default_lanes();
        let p = CapacityFirstPolicy::new(times);
        assert_eq!(p.assign(&cust(1, 19, 0), &mut lanes), LaneKind::SelfService);
        assert_eq!(p.assign(&cust(2, 20, 0), &mut lanes), LaneKind::Regular(1));
    }
}
