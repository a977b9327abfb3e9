//! Unit tests for the route ring and loader.

use crate::{RouteError, RouteRing};

fn ring() -> RouteRing {
    RouteRing::from_names(["Stop A", "Stop B", "Stop C", "Stop D", "Stop E"]).unwrap()
}

fn names(ring: &RouteRing) -> Vec<&str> {
    ring.iter().map(|s| s.name.as_str()).collect()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn first_name_is_head_and_current() {
        let ring = ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.current().name.as_str(), "Stop A");
        assert_eq!(ring.current_index(), 0);
    }

    #[test]
    fn rejects_an_empty_list() {
        let err = RouteRing::from_names(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, RouteError::EmptyRoute));
    }

    #[test]
    fn rejects_blank_names() {
        let err = RouteRing::from_names(["Stop A", "   "]).unwrap_err();
        assert!(matches!(err, RouteError::EmptyName));
    }

    #[test]
    fn rejects_case_insensitive_duplicates() {
        let err = RouteRing::from_names(["Depot", "DEPOT"]).unwrap_err();
        assert!(matches!(err, RouteError::Duplicate { .. }));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let ring = RouteRing::from_names(["  Depot  "]).unwrap();
        assert_eq!(ring.current().name.as_str(), "Depot");
    }
}

#[cfg(test)]
mod traversal {
    use super::*;

    #[test]
    fn advance_walks_the_ring_and_wraps() {
        let mut ring = ring();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(ring.current().name.as_str().to_owned());
            ring.advance();
        }
        assert_eq!(seen, ["Stop A", "Stop B", "Stop C", "Stop D", "Stop E", "Stop A"]);
    }

    #[test]
    fn full_cycle_returns_to_origin_from_any_start() {
        let mut ring = ring();
        ring.advance();
        ring.advance();
        let origin = ring.current().name.clone();
        for _ in 0..ring.len() {
            ring.advance();
        }
        assert_eq!(ring.current().name, origin);
    }

    #[test]
    fn single_stop_advance_stays_put() {
        let mut ring = RouteRing::from_names(["Only"]).unwrap();
        ring.advance();
        assert_eq!(ring.current().name.as_str(), "Only");
    }

    #[test]
    fn iter_is_head_first_and_cursor_independent() {
        let mut ring = ring();
        ring.advance();
        ring.advance();
        assert_eq!(names(&ring), ["Stop A", "Stop B", "Stop C", "Stop D", "Stop E"]);
        // restartable: a second traversal sees the same order
        assert_eq!(names(&ring), names(&ring));
    }

    #[test]
    fn find_is_case_insensitive() {
        let ring = ring();
        assert!(ring.find("stop c").is_some());
        assert!(ring.find("STOP C").is_some());
        assert!(ring.find("Stop Z").is_none());
    }
}

#[cfg(test)]
mod editing {
    use super::*;

    #[test]
    fn append_lands_between_tail_and_head() {
        let mut ring = ring();
        ring.append("Stop F").unwrap();
        assert_eq!(names(&ring), ["Stop A", "Stop B", "Stop C", "Stop D", "Stop E", "Stop F"]);
        // the new tail's successor is the head
        for _ in 0..5 {
            ring.advance();
        }
        assert_eq!(ring.current().name.as_str(), "Stop F");
        ring.advance();
        assert_eq!(ring.current().name.as_str(), "Stop A");
    }

    #[test]
    fn append_validates_the_name() {
        let mut ring = ring();
        assert!(matches!(ring.append(""), Err(RouteError::EmptyName)));
        assert!(matches!(ring.append("   "), Err(RouteError::EmptyName)));
        assert!(matches!(ring.append("stop c"), Err(RouteError::Duplicate { .. })));
        assert_eq!(ring.len(), 5);
    }

    #[test]
    fn remove_before_cursor_shifts_it_down() {
        let mut ring = ring();
        ring.advance();
        ring.advance(); // on Stop C
        ring.remove("Stop A").unwrap();
        assert_eq!(ring.current().name.as_str(), "Stop C");
        assert_eq!(names(&ring), ["Stop B", "Stop C", "Stop D", "Stop E"]);
    }

    #[test]
    fn remove_current_lands_on_former_successor() {
        let mut ring = ring();
        ring.remove("Stop A").unwrap();
        assert_eq!(ring.current().name.as_str(), "Stop B");
        assert_eq!(names(&ring), ["Stop B", "Stop C", "Stop D", "Stop E"]);
    }

    #[test]
    fn remove_current_tail_wraps_to_head() {
        let mut ring = ring();
        for _ in 0..4 {
            ring.advance(); // on Stop E
        }
        ring.remove("Stop E").unwrap();
        assert_eq!(ring.current().name.as_str(), "Stop A");
    }

    #[test]
    fn remove_after_cursor_is_position_neutral() {
        let mut ring = ring();
        ring.remove("Stop C").unwrap();
        assert_eq!(ring.current().name.as_str(), "Stop A");
        assert_eq!(names(&ring), ["Stop A", "Stop B", "Stop D", "Stop E"]);
    }

    #[test]
    fn remove_returns_the_stop_with_its_counters() {
        let mut ring = ring();
        ring.record_boarding(7);
        ring.record_alighting(2);
        let removed = ring.remove("stop a").unwrap();
        assert_eq!(removed.name.as_str(), "Stop A");
        assert_eq!(removed.boarded, 7);
        assert_eq!(removed.alighted, 2);
    }

    #[test]
    fn not_found_wins_over_last_stop() {
        let mut ring = RouteRing::from_names(["Only"]).unwrap();
        assert!(matches!(
            ring.remove("Missing"),
            Err(RouteError::NotFound { .. })
        ));
        assert!(matches!(ring.remove("only"), Err(RouteError::LastStop)));
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn removed_name_can_be_added_again() {
        let mut ring = ring();
        ring.remove("Stop C").unwrap();
        ring.append("Stop C").unwrap();
        assert_eq!(names(&ring), ["Stop A", "Stop B", "Stop D", "Stop E", "Stop C"]);
    }
}

#[cfg(test)]
mod counters {
    use super::*;

    #[test]
    fn records_hit_only_the_current_stop() {
        let mut ring = ring();
        ring.record_boarding(3);
        ring.record_alighting(1);
        assert_eq!(ring.current().boarded, 3);
        assert_eq!(ring.current().alighted, 1);
        ring.advance();
        assert_eq!(ring.current().boarded, 0);
        assert_eq!(ring.current().alighted, 0);
    }

    #[test]
    fn records_accumulate() {
        let mut ring = ring();
        ring.record_boarding(2);
        ring.record_boarding(5);
        assert_eq!(ring.current().boarded, 7);
    }

    #[test]
    fn zero_count_is_a_noop() {
        let mut ring = ring();
        ring.record_boarding(0);
        ring.record_alighting(0);
        assert_eq!(ring.current().boarded, 0);
        assert_eq!(ring.current().alighted, 0);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_route_reader, RouteError};

    const CSV: &[u8] = b"\
name\n\
Depot\n\
Market Street\n\
Harbor\n\
";

    #[test]
    fn loads_stops_in_file_order() {
        let ring = load_route_reader(Cursor::new(CSV)).unwrap();
        let names: Vec<&str> = ring.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Depot", "Market Street", "Harbor"]);
        assert_eq!(ring.current().name.as_str(), "Depot");
    }

    #[test]
    fn header_only_is_an_empty_route() {
        let err = load_route_reader(Cursor::new(b"name\n".as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::EmptyRoute));
    }

    #[test]
    fn blank_name_row_is_rejected() {
        let bad = b"name\nDepot\n   \n";
        let err = load_route_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::EmptyName));
    }

    #[test]
    fn duplicate_row_is_rejected() {
        let bad = b"name\nDepot\ndepot\n";
        let err = load_route_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::Duplicate { .. }));
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let bad = b"name\nDepot,extra\n";
        let err = load_route_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod persistence {
    use crate::RouteRing;

    #[test]
    fn saved_ring_round_trips_with_cursor_and_counters() {
        let mut ring = RouteRing::from_names(["Depot", "Harbor"]).unwrap();
        ring.advance();
        ring.record_boarding(3);
        let json = serde_json::to_string(&ring).unwrap();
        let back: RouteRing = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.current_index(), 1);
        assert_eq!(back.current().name.as_str(), "Harbor");
        assert_eq!(back.current().boarded, 3);
    }

    #[test]
    fn out_of_range_cursor_is_rejected() {
        let json = r#"{"stops":[{"name":"Depot","boarded":0,"alighted":0}],"cursor":1}"#;
        assert!(serde_json::from_str::<RouteRing>(json).is_err());
    }

    #[test]
    fn empty_stop_list_is_rejected() {
        let json = r#"{"stops":[],"cursor":0}"#;
        assert!(serde_json::from_str::<RouteRing>(json).is_err());
    }

    #[test]
    fn duplicate_stop_names_are_rejected() {
        let json = concat!(
            r#"{"stops":[{"name":"Depot","boarded":0,"alighted":0},"#,
            r#"{"name":"DEPOT","boarded":1,"alighted":0}],"cursor":0}"#,
        );
        assert!(serde_json::from_str::<RouteRing>(json).is_err());
    }
}
