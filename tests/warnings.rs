use stoplink::gtfs::{Route, Stop, StopId, StopTime, Trip, TripId};
use stoplink::network::{LinkId, Network, Node, PointOnLink};
use stoplink::path::{MatchedPosition, PathDump};
use stoplink::transit::{assign_trip, AssignmentMap, StopLinker};

use geo::Point;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

const STEP: f64 = 0.001;
const LINK_LENGTH: f64 = 111.19;

thread_local! {
    static WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Keeps the warnings logged by the current thread.
struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.with(|warnings| warnings.borrow_mut().push(record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INSTALL: Once = Once::new();

/// Runs `f`, returning its result with the warnings it logged.
fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).expect("no other logger is installed");
        log::set_max_level(LevelFilter::Warn);
    });

    WARNINGS.with(|warnings| warnings.borrow_mut().clear());
    let result = f();
    let warnings = WARNINGS.with(|warnings| warnings.take());

    (result, warnings)
}

fn count(warnings: &[String], needle: &str) -> usize {
    warnings.iter().filter(|warning| warning.contains(needle)).count()
}

/// An equator corridor where link `k * 10` joins node `k` to node `k + 1`.
fn corridor(links: i64) -> Network {
    let nodes = (1..=links + 1).map(|k| Node::new(Point::new((k - 1) as f64 * STEP, 0.0), k));
    let links = (1..=links).map(|k| (k * 10, k, k + 1));

    Network::from_parts(nodes, links).expect("corridor must build")
}

fn along(k: i64, fraction: f64, north: f64) -> Point {
    Point::new(((k - 1) as f64 + fraction) * STEP, north)
}

fn matched(seq: u32, k: i64, route_info: &[i64], restart: bool, total_dist: f64) -> MatchedPosition {
    let position = along(k, 0.5, 0.0);

    MatchedPosition {
        seq: Some(seq),
        position,
        point_on_link: PointOnLink {
            link: k * 10,
            dist: 55.0,
            ref_dist: 0.0,
            position,
        },
        route_info: route_info.iter().map(|k| k * 10).collect::<Vec<LinkId>>(),
        restart,
        total_dist,
        total_cost: total_dist,
        prev: None,
    }
}

fn chain(mut positions: Vec<MatchedPosition>) -> Vec<MatchedPosition> {
    for index in 0..positions.len() {
        positions[index].prev = (index != 0 && !positions[index].restart).then(|| index - 1);
    }

    positions
}

fn trip(id: TripId) -> Trip {
    Trip {
        id,
        route: Route {
            id: "R1".to_string(),
            short_name: "801".to_string(),
            long_name: String::new(),
        },
        service_id: "WK".to_string(),
        shape_id: 7,
    }
}

fn stop_times(trip_id: TripId, stops: &[(u32, StopId, Point)]) -> Vec<StopTime> {
    stops
        .iter()
        .map(|(seq, id, position)| StopTime {
            trip_id,
            seq: *seq,
            arrival: None,
            departure: None,
            stop: Stop {
                id: *id,
                name: format!("Stop {id}"),
                position: *position,
            },
        })
        .collect()
}

#[test]
fn names_kept_and_dropped_duplicates() {
    let stops = stop_times(1, &[(1, 100, along(1, 0.5, 0.0)), (2, 101, along(2, 0.3, 0.0)), (3, 102, along(2, 0.6, 0.0))]);

    let mut matches = vec![
        matched(1, 1, &[1], true, 0.0),
        matched(2, 2, &[2], false, 100.0),
        matched(3, 2, &[], false, 130.0),
    ];
    matches[1].point_on_link.ref_dist = 20.0;
    matches[2].point_on_link.ref_dist = 8.0;

    let mut assignments = AssignmentMap::default();
    let (assignment, warnings) =
        capture(|| assign_trip(1, 0, &[10, 20, 30, 40], &matches, &stops, 0, &mut assignments));

    assert_eq!(assignment.rows[1].stop_id, Some(102));
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0],
        "2 stops have been matched for TripID 1, LinkID 20. Keeping Stop 102, Stop Seq 3. Dropping Stop 101 (Seq 2)"
    );
}

#[test]
fn names_rejected_link_on_conflict() {
    let first = stop_times(1, &[(1, 100, along(1, 0.5, 0.0))]);
    let second = stop_times(2, &[(1, 100, along(1, 0.5, 0.0))]);

    let mut assignments = AssignmentMap::default();
    let (_, warnings) = capture(|| {
        assign_trip(1, 0, &[10], &[matched(1, 1, &[1], true, 0.0)], &first, 0, &mut assignments);

        let mut other = matched(1, 1, &[1], true, 0.0);
        other.point_on_link.link = 11;
        assign_trip(2, 0, &[11], &[other], &second, 0, &mut assignments)
    });

    assert_eq!(assignments[&100].link, 10);
    assert_eq!(
        warnings,
        vec!["stopID 100 is attempted to be assigned to linkID 11, but it had already been assigned to linkID 10"]
    );
}

#[test]
fn reports_share_of_truncated_path() {
    let network = corridor(9);
    let path = chain(vec![
        matched(1, 1, &[1], true, 0.0),
        matched(2, 2, &[2], false, 100.0),
        matched(3, 4, &[4], true, 100.0),
        matched(4, 5, &[5], false, 200.0),
        matched(5, 6, &[6], false, 300.0),
        matched(6, 7, &[7, 8], false, 400.0),
        matched(7, 9, &[9], false, 500.0),
    ]);
    let paths = PathDump::from([(7, path)]);
    let stops = stop_times(1, &[(1, 100, along(5, 0.5, 0.0001))]);

    let mut linker = StopLinker::new(&network, &paths, 800.0);
    let (linked, warnings) = capture(|| linker.link_trip(&trip(1), &stops));

    let rows = linked.expect("search succeeds").expect("trip is usable");
    assert_eq!(rows.first().map(|row| row.sequence), Some(2));
    assert_eq!(
        count(&warnings, "For shape ID 7 from seq. 3 through 7, 75.00% of 8 links will be used."),
        1
    );
}

#[test]
fn reports_each_unmatched_stop_once_per_trip() {
    let network = corridor(3);
    let path = chain(
        (1..=3)
            .map(|k| matched(k as u32, k, &[k], k == 1, (k - 1) as f64 * LINK_LENGTH))
            .collect(),
    );
    let paths = PathDump::from([(7, path)]);

    // The second stop lies kilometers off the corridor.
    let first = stop_times(1, &[(5, 100, along(1, 0.5, 0.0001)), (7, 101, along(2, 0.5, 0.05))]);
    let second = stop_times(2, &[(5, 100, along(1, 0.5, 0.0001)), (7, 101, along(2, 0.5, 0.05))]);

    let mut linker = StopLinker::new(&network, &paths, 100.0).diagnostics(true);
    let (linked, warnings) = capture(|| {
        let first = linker.link_trip(&trip(1), &first);
        let second = linker.link_trip(&trip(2), &second);
        (first, second)
    });

    assert!(matches!(linked, (Ok(Some(_)), Ok(Some(_)))));

    let unmatched = |trip: TripId| {
        count(
            &warnings,
            &format!("Trip tripID {trip}, stopID 101 stop seq. 7 will not be in the bus_route_link file."),
        )
    };
    assert_eq!(unmatched(1), 1);
    assert_eq!(unmatched(2), 1);
    assert_eq!(count(&warnings, "will not be in the bus_route_link file."), 2);

    let collector = linker.collector().expect("diagnostics were enabled");
    let records = collector.get(&7).expect("shape was recorded");
    assert!(records[&7].restart);
    assert!(records[&7].point_on_link.is_none());
}
