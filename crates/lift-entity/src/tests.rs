//! Unit tests for lift-entity.

use lift_core::{Direction, ElevatorId};

use crate::{Elevator, Passenger, WaitingRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn car(capacity: u32, floor: u32) -> Elevator {
    Elevator::placed(ElevatorId(0), capacity, floor)
}

// ── Passenger ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod passenger {
    use super::*;

    #[test]
    fn new_passenger_has_no_wait() {
        let p = Passenger::new(2, 5);
        assert_eq!(p.wait_time(), 0);
        assert!(!p.id.is_valid());
    }

    #[test]
    #[should_panic]
    fn same_start_and_target_rejected() {
        let _ = Passenger::new(3, 3);
    }

    #[test]
    fn anger_levels_follow_buckets() {
        let mut p = Passenger::new(1, 2);
        let mut levels = Vec::new();
        for _ in 0..11 {
            levels.push(p.anger_level());
            p.accrue_wait();
        }
        assert_eq!(levels, vec![0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4]);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn starts_empty_on_ground_floor() {
        let e = Elevator::new(ElevatorId(1), 3);
        assert_eq!(e.current_floor(), 1);
        assert!(e.is_empty());
        assert_eq!(e.free_slots(), 3);
    }

    #[test]
    fn free_slots_track_load() {
        let mut e = car(4, 1);
        e.board(Passenger::new(1, 3));
        assert_eq!(e.free_slots(), 3);
        assert_eq!(e.fullness(), 0.25);
        e.board(Passenger::new(1, 4));
        e.board(Passenger::new(1, 5));
        e.board(Passenger::new(1, 6));
        assert!(e.is_full());
        assert_eq!(e.free_slots(), 0);
        assert_eq!(e.fullness(), 1.0);
    }

    #[test]
    #[should_panic]
    fn boarding_a_full_car_panics() {
        let mut e = car(1, 1);
        e.board(Passenger::new(1, 3));
        e.board(Passenger::new(1, 4));
    }

    #[test]
    fn alight_keeps_boarding_order_of_the_rest() {
        let mut e = car(4, 1);
        e.board(Passenger::new(1, 3));
        e.board(Passenger::new(1, 2));
        e.board(Passenger::new(1, 5));
        e.board(Passenger::new(1, 2));
        e.move_one(Direction::Up, 6);

        let out = e.alight();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.target == 2));
        let remaining: Vec<_> = e.passengers().iter().map(|p| p.target).collect();
        assert_eq!(remaining, vec![3, 5]);
    }

    #[test]
    fn move_one_steps_a_single_floor() {
        let mut e = car(1, 3);
        e.move_one(Direction::Up, 6);
        assert_eq!(e.current_floor(), 4);
        e.move_one(Direction::Stay, 6);
        assert_eq!(e.current_floor(), 4);
        e.move_one(Direction::Down, 6);
        assert_eq!(e.current_floor(), 3);
    }

    #[test]
    #[should_panic]
    fn moving_below_ground_panics() {
        car(1, 1).move_one(Direction::Down, 6);
    }

    #[test]
    #[should_panic]
    fn moving_above_roof_panics() {
        car(1, 6).move_one(Direction::Up, 6);
    }

    #[test]
    fn accrue_wait_touches_every_rider() {
        let mut e = car(2, 1);
        e.board(Passenger::new(1, 3));
        e.board(Passenger::new(1, 4));
        e.accrue_wait();
        assert!(e.passengers().iter().all(|p| p.wait_time() == 1));
    }
}

// ── WaitingRegistry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting {
    use super::*;

    #[test]
    fn new_registry_has_every_floor() {
        let w = WaitingRegistry::new(5);
        assert_eq!(w.num_floors(), 5);
        assert_eq!(w.iter().count(), 5);
        assert!(w.is_empty());
    }

    #[test]
    fn push_files_under_start_floor_in_arrival_order() {
        let mut w = WaitingRegistry::new(5);
        w.push(Passenger::new(3, 1));
        w.push(Passenger::new(3, 5));
        w.push(Passenger::new(2, 4));
        let targets: Vec<_> = w.at(3).iter().map(|p| p.target).collect();
        assert_eq!(targets, vec![1, 5]);
        assert_eq!(w.total(), 3);
        assert_eq!(w.occupied_floors().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn at_outside_building_is_empty() {
        let w = WaitingRegistry::new(3);
        assert!(w.at(0).is_empty());
        assert!(w.at(9).is_empty());
    }

    #[test]
    #[should_panic]
    fn push_outside_building_panics() {
        let mut w = WaitingRegistry::new(3);
        w.push(Passenger::new(4, 1));
    }

    #[test]
    fn take_front_is_bounded_and_ordered() {
        let mut w = WaitingRegistry::new(4);
        for target in [2, 3, 4] {
            w.push(Passenger::new(1, target));
        }
        let taken = w.take_front(1, 2);
        assert_eq!(taken.iter().map(|p| p.target).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(w.at(1).len(), 1);
        assert_eq!(w.at(1)[0].target, 4);

        let rest = w.take_front(1, 10);
        assert_eq!(rest.len(), 1);
        assert!(w.at(1).is_empty());
    }

    #[test]
    fn accrue_wait_touches_every_floor() {
        let mut w = WaitingRegistry::new(3);
        w.push(Passenger::new(1, 2));
        w.push(Passenger::new(3, 2));
        w.accrue_wait();
        w.accrue_wait();
        assert!(w.iter().flat_map(|(_, q)| q).all(|p| p.wait_time() == 2));
    }
}
