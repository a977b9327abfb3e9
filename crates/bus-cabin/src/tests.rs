//! Unit tests for the seat grid.

use bus_core::{CabinLayout, StopName};

use crate::SeatGrid;

fn coach() -> SeatGrid {
    SeatGrid::new(CabinLayout::new(10, 5).unwrap())
}

fn stop(name: &str) -> StopName {
    StopName::new(name)
}

#[cfg(test)]
mod boarding {
    use super::*;

    #[test]
    fn fills_seats_in_ascending_order() {
        let mut grid = coach();
        assert_eq!(grid.board(&stop("Depot"), 3), vec![1, 2, 3]);
        assert_eq!(grid.occupied_count(), 3);
        assert_eq!(grid.available_count(), 47);
    }

    #[test]
    fn reuses_freed_low_seats_first() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 4);
        grid.alight(&[2]).unwrap();
        // seat 2 is the lowest free seat again
        assert_eq!(grid.board(&stop("Market"), 2), vec![2, 5]);
    }

    #[test]
    fn clamps_to_availability() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 48);
        let seated = grid.board(&stop("Market"), 5);
        assert_eq!(seated, vec![49, 50]);
        assert!(grid.is_full());
    }

    #[test]
    fn overasking_an_empty_bus_fills_it_exactly() {
        let mut grid = coach();
        let seated = grid.board(&stop("Depot"), 55);
        assert_eq!(seated.len() as u32, grid.capacity());
        assert!(grid.is_full());
    }

    #[test]
    fn full_bus_boards_nobody() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 50);
        assert!(grid.board(&stop("Market"), 1).is_empty());
        assert_eq!(grid.occupied_count(), 50);
    }

    #[test]
    fn zero_request_is_a_noop() {
        let mut grid = coach();
        assert!(grid.board(&stop("Depot"), 0).is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn seats_carry_the_boarding_stop() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 2);
        let info = grid.seat(1).unwrap();
        assert_eq!(info.boarded_at, Some(stop("Depot")));
        assert!(info.is_occupied());
        assert!(!grid.seat(3).unwrap().is_occupied());
    }

    #[test]
    fn counts_stay_consistent() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 17);
        grid.alight(&[3, 9]).unwrap();
        grid.board(&stop("Market"), 6);
        assert_eq!(grid.occupied_count() + grid.available_count(), grid.capacity());
        assert_eq!(grid.occupied_count(), 21);
    }
}

#[cfg(test)]
mod alighting {
    use super::*;
    use crate::CabinError;

    #[test]
    fn releases_and_reports_ascending() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 5);
        let released = grid.alight(&[4, 2]).unwrap();
        let numbers: Vec<u32> = released.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![2, 4]);
        assert!(released.iter().all(|r| r.boarded_at == stop("Depot")));
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn out_of_range_leaves_grid_untouched() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 3);
        let err = grid.alight(&[1, 999]).unwrap_err();
        assert_eq!(err, CabinError::OutOfRange { seat: 999, capacity: 50 });
        // seat 1 must not have been released before the failure
        assert_eq!(grid.occupied_count(), 3);
        assert!(grid.seat(1).unwrap().is_occupied());
    }

    #[test]
    fn empty_seat_leaves_grid_untouched() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 3);
        let err = grid.alight(&[2, 7]).unwrap_err();
        assert_eq!(err, CabinError::AlreadyEmpty { seat: 7 });
        assert_eq!(grid.occupied_count(), 3);
        assert!(grid.seat(2).unwrap().is_occupied());
    }

    #[test]
    fn first_offender_is_reported() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 1);
        let err = grid.alight(&[0, 999]).unwrap_err();
        assert_eq!(err, CabinError::OutOfRange { seat: 0, capacity: 50 });
        // an occupied-check failure earlier in the list wins over a later range failure
        let err = grid.alight(&[40, 999]).unwrap_err();
        assert_eq!(err, CabinError::AlreadyEmpty { seat: 40 });
    }

    #[test]
    fn duplicates_collapse_to_one_release() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 3);
        let released = grid.alight(&[2, 2, 2]).unwrap();
        assert_eq!(released.len(), 1);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn empty_input_is_trivially_valid() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 3);
        assert_eq!(grid.alight(&[]).unwrap(), vec![]);
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn board_then_alight_restores_availability() {
        let mut grid = coach();
        let seated = grid.board(&stop("Depot"), 7);
        let released = grid.alight(&seated).unwrap();
        assert_eq!(released.len(), 7);
        assert!(grid.is_empty());
        assert_eq!(grid.available_count(), grid.capacity());
        assert!(grid.snapshot().iter().all(|s| !s.is_occupied()));
    }
}

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn occupied_from_matches_case_insensitively() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 3);
        grid.board(&stop("Market"), 2);
        assert_eq!(grid.occupied_from("depot"), 3);
        assert_eq!(grid.occupied_from("DEPOT"), 3);
        assert_eq!(grid.occupied_from("Market"), 2);
        assert_eq!(grid.occupied_from("Harbor"), 0);
    }

    #[test]
    fn tags_survive_by_value() {
        // the grid never sees route edits; a tag outlives its stop
        let mut grid = coach();
        let depot = stop("Depot");
        grid.board(&depot, 2);
        drop(depot);
        assert_eq!(grid.occupied_from("Depot"), 2);
    }

    #[test]
    fn snapshot_reflects_state_and_is_stable() {
        let mut grid = coach();
        grid.board(&stop("Depot"), 4);
        let snap = grid.snapshot();
        assert_eq!(snap.len(), 50);
        assert_eq!(snap.iter().filter(|s| s.is_occupied()).count(), 4);
        assert_eq!(snap[0].number, 1);
        assert_eq!((snap[0].row, snap[0].col), (0, 0));
        assert_eq!((snap[49].row, snap[49].col), (9, 4));
        assert_eq!(grid.snapshot(), snap);
    }

    #[test]
    fn seat_lookup_validates_the_number() {
        let grid = coach();
        assert!(grid.seat(0).is_err());
        assert!(grid.seat(51).is_err());
        assert_eq!(grid.seat(50).unwrap().number, 50);
    }
}
